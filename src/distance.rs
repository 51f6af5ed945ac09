use grid_util::point::Point;

/// Manhattan (L1) distance, the exact remaining cost on a 4-grid without obstacles.
pub fn manhattan(a: &Point, b: &Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// [Chebyshev distance](https://en.wikipedia.org/wiki/Chebyshev_distance), the exact remaining
/// cost on an 8-grid without obstacles.
pub fn chebyshev(a: &Point, b: &Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Offsets in expansion order: north, south, east, west, then northeast, southeast, southwest
/// and northwest. Under ties this order decides which equal-cost node is kept, so it must not
/// be changed.
static OFFSETS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

/// How the search may move between cells. Each mode comes with the heuristic that is exact for
/// it on an empty grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Movement {
    /// 8-neighborhood, Chebyshev heuristic.
    #[default]
    Diagonal,
    /// 4-neighborhood, Manhattan heuristic.
    Cardinal,
}

impl Movement {
    pub fn offsets(&self) -> &'static [(i32, i32)] {
        match self {
            Movement::Diagonal => &OFFSETS,
            Movement::Cardinal => &OFFSETS[..4],
        }
    }

    pub fn heuristic(&self, a: &Point, b: &Point) -> i32 {
        match self {
            Movement::Diagonal => chebyshev(a, b),
            Movement::Cardinal => manhattan(a, b),
        }
    }
}
