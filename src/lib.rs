//! # grid_astar
//!
//! Shortest paths on a fixed [GRID_SIZE] x [GRID_SIZE] grid with blocked cells, computed with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm). Movement is 8-directional by
//! default, guided by the [Chebyshev distance](https://en.wikipedia.org/wiki/Chebyshev_distance);
//! a 4-directional mode uses the Manhattan distance instead.
//!
//! The search is fully deterministic: ties between equally good nodes are always resolved in
//! favour of the node discovered first, so identical inputs give identical paths. Connected
//! components are computed before searching to avoid flood-filling the grid if no path exists.
//!
//! Endpoints usually come from user input of the form `(x, y)` with 1-based coordinates, see
//! [parse_endpoints] and [find_path].
pub mod astar;
pub mod distance;
pub mod endpoints;
pub mod frontier;
pub mod pathing_grid;

use grid_util::point::Point;
use std::collections::HashSet;
use std::hash::BuildHasher;

pub use crate::astar::AstarSolver;
pub use crate::distance::{chebyshev, manhattan, Movement};
pub use crate::endpoints::{parse_endpoint, parse_endpoints, validate_endpoints, EndpointError};
pub use crate::pathing_grid::{CellClass, CellGrid};

/// Width and height of the grid. Valid 0-based coordinates are `0..GRID_SIZE`.
pub const GRID_SIZE: usize = 50;

/// Computes a shortest path with the default [AstarSolver]. See
/// [AstarSolver::shortest_path] for the shape of the result.
pub fn shortest_path<'a, W>(walls: W, start: Point, end: Point) -> Vec<Point>
where
    W: IntoIterator<Item = &'a Point>,
{
    AstarSolver::new().shortest_path(walls, start, end)
}

/// Validates textual endpoints and searches a path between them. An unreachable goal is not an
/// error and yields an empty path.
pub fn find_path<S: BuildHasher>(
    raw_start: &str,
    raw_end: &str,
    walls: &HashSet<Point, S>,
) -> Result<Vec<Point>, EndpointError> {
    let (start, end) = validate_endpoints(raw_start, raw_end, walls)?;
    Ok(shortest_path(walls, start, end))
}
