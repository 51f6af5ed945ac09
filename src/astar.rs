use crate::distance::Movement;
use crate::frontier::{Frontier, Member, Node, PathTree};
use crate::pathing_grid::{CellClass, CellGrid};
use fxhash::FxHashSet;
use grid_util::point::Point;
use log::{debug, info, warn};

/// A* search on a freshly classified [CellGrid]. Each call owns its grid, explored set and
/// frontier, so a solver can be shared freely between callers.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Neighbourhood and matching heuristic.
    pub movement: Movement,
    /// Rejects goals on a different connected component before searching. Only saves work,
    /// the resulting path is the same either way.
    pub check_components: bool,
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            movement: Movement::Diagonal,
            check_components: true,
        }
    }

    /// Computes a shortest path from `start` to `end` around `walls`. The result holds the
    /// intermediate steps only: neither `start` nor `end` is part of it. An empty path is
    /// returned if `end` cannot be reached, but also if the endpoints are adjacent.
    ///
    /// Callers must make sure that `start != end` and that neither endpoint is a wall.
    pub fn shortest_path<'a, W>(&self, walls: W, start: Point, end: Point) -> Vec<Point>
    where
        W: IntoIterator<Item = &'a Point>,
    {
        self.search(walls, start, end, |_, _| {})
    }

    /// The search loop. `on_dedup` observes the frontier each time a state has been
    /// deduplicated.
    pub(crate) fn search<'a, W, F>(
        &self,
        walls: W,
        start: Point,
        end: Point,
        mut on_dedup: F,
    ) -> Vec<Point>
    where
        W: IntoIterator<Item = &'a Point>,
        F: FnMut(&Frontier, &Point),
    {
        let mut grid = CellGrid::build(walls, &[start, end]);
        if self.check_components {
            grid.generate_components(self.movement);
            if grid.unreachable(&start, &end) {
                info!("{} is not reachable from {}", end, start);
                return Vec::new();
            }
            info!("{} is reachable from {}, computing path", end, start);
        }
        debug!("Searching on grid:\n{}", grid);

        let mut explored: FxHashSet<Point> = FxHashSet::default();
        let mut paths = PathTree::new();
        let mut frontier = Frontier::new();
        frontier.add(Node::new(
            start,
            self.movement.heuristic(&start, &end),
            None,
            &paths,
        ));

        while let Some(node) = frontier.retrieve() {
            explored.insert(node.state);
            // Children inherit the path up to and including the expanded state.
            let path = paths.extend(node.path, node.state);
            for option in grid.options(&node.state, &explored, self.movement) {
                if grid.get(&option) == CellClass::Endpoint && option != start {
                    debug!("Found {} after expanding {} states", end, explored.len());
                    // The first point on any path is the start itself.
                    return paths.to_vec(Some(path)).into_iter().skip(1).collect();
                }
                let child = Node::new(
                    option,
                    self.movement.heuristic(&option, &end),
                    Some(path),
                    &paths,
                );
                let group = frontier.best_cost_group(&child);
                if group.best == Member::Candidate {
                    frontier.add(child);
                }
                frontier.purge(group.surplus());
                on_dedup(&frontier, &option);
            }
        }
        if self.check_components {
            warn!("Reachable goal could not be pathed to, is reachable graph correct?");
        } else {
            info!("{} is not reachable from {}", end, start);
        }
        Vec::new()
    }
}
