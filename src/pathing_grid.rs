use crate::distance::Movement;
use crate::GRID_SIZE;
use core::fmt;
use fxhash::FxHashSet;
use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;
use log::debug;
use petgraph::unionfind::UnionFind;

/// Classification of a single cell for the duration of one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellClass {
    #[default]
    Open,
    Wall,
    Endpoint,
}

/// [CellGrid] is the `GRID_SIZE` x `GRID_SIZE` overlay of [CellClass] values a search runs on,
/// stored in a [SimpleGrid]. Connectivity between non-wall cells is tracked in a [UnionFind]
/// structure so that unreachable goals can be rejected without flood-filling the grid.
#[derive(Clone, Debug)]
pub struct CellGrid {
    cells: SimpleGrid<CellClass>,
    pub components: UnionFind<usize>,
}

impl Default for CellGrid {
    fn default() -> CellGrid {
        CellGrid {
            cells: SimpleGrid::new(GRID_SIZE, GRID_SIZE, CellClass::Open),
            components: UnionFind::new(GRID_SIZE * GRID_SIZE),
        }
    }
}

impl CellGrid {
    /// Classifies every cell: [CellClass::Endpoint] if it is one of `endpoints`, otherwise
    /// [CellClass::Wall] if it is one of `walls`, otherwise [CellClass::Open]. Points outside
    /// the grid are ignored.
    pub fn build<'a, W>(walls: W, endpoints: &[Point]) -> CellGrid
    where
        W: IntoIterator<Item = &'a Point>,
    {
        let mut grid = CellGrid::default();
        for wall in walls {
            grid.set(wall, CellClass::Wall);
        }
        // Endpoints are written last so they win over walls on the same cell.
        for endpoint in endpoints {
            grid.set(endpoint, CellClass::Endpoint);
        }
        grid
    }

    pub fn in_bounds(&self, point: &Point) -> bool {
        point.x >= 0 && point.y >= 0 && self.cells.point_in_bounds(*point)
    }

    fn set(&mut self, point: &Point, class: CellClass) {
        if self.in_bounds(point) {
            self.cells.set_point(*point, class);
        } else {
            debug!("Ignoring {:?} cell {} outside of the grid", class, point);
        }
    }

    /// Class of the cell at `point`. Everything outside the grid reads as a wall, which makes
    /// the grid behave as if it were bordered by blocked cells.
    pub fn get(&self, point: &Point) -> CellClass {
        if self.in_bounds(point) {
            self.cells.get_point(*point)
        } else {
            CellClass::Wall
        }
    }

    pub fn can_move_to(&self, point: &Point) -> bool {
        self.get(point) != CellClass::Wall
    }

    /// Adjacent cells of `state` that are in bounds, not walls and not yet explored, in the
    /// fixed expansion order of `movement`.
    pub fn options(
        &self,
        state: &Point,
        explored: &FxHashSet<Point>,
        movement: Movement,
    ) -> Vec<Point> {
        movement
            .offsets()
            .iter()
            .map(|&(dx, dy)| Point::new(state.x + dx, state.y + dy))
            .filter(|p| self.can_move_to(p) && !explored.contains(p))
            .collect()
    }

    /// Generates a new [UnionFind] structure and links up non-wall neighbours under `movement`
    /// into the same components.
    pub fn generate_components(&mut self, movement: Movement) {
        debug!("Generating connected components");
        self.components = UnionFind::new(GRID_SIZE * GRID_SIZE);
        // Linking towards positive offsets only is enough, the other half is symmetric.
        let forward = movement
            .offsets()
            .iter()
            .filter(|(dx, dy)| *dx > 0 || (*dx == 0 && *dy > 0))
            .collect::<Vec<_>>();
        for x in 0..GRID_SIZE as i32 {
            for y in 0..GRID_SIZE as i32 {
                let point = Point::new(x, y);
                if !self.can_move_to(&point) {
                    continue;
                }
                let parent_ix = self.cells.get_ix_point(&point);
                for (dx, dy) in &forward {
                    let n = Point::new(x + dx, y + dy);
                    if self.can_move_to(&n) {
                        self.components.union(parent_ix, self.cells.get_ix_point(&n));
                    }
                }
            }
        }
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Out of bounds points are never
    /// reachable.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start) && self.in_bounds(goal) {
            let start_ix = self.cells.get_ix_point(start);
            let goal_ix = self.cells.get_ix_point(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }
}

impl fmt::Display for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in (0..GRID_SIZE as i32).rev() {
            let row = (0..GRID_SIZE as i32)
                .map(|x| match self.get(&Point::new(x, y)) {
                    CellClass::Open => '.',
                    CellClass::Wall => '#',
                    CellClass::Endpoint => 'E',
                })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
