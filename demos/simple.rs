use fxhash::FxHashSet;
use grid_astar::{find_path, CellGrid};
use grid_util::point::Point;

// In this example a path is found around a wall segment, with endpoints given the way a user
// would type them. Coordinates typed by the user are 1-based, the returned path is 0-based.
//
// Run with RUST_LOG=info to see what the solver is doing.

fn main() {
    env_logger::init();
    let walls: FxHashSet<Point> = (0..12).map(|y| Point::new(6, y)).collect();
    let (raw_start, raw_end) = ("(2,3)", "(12,4)");
    match find_path(raw_start, raw_end, &walls) {
        Ok(path) if path.is_empty() => println!("No path from {} to {}", raw_start, raw_end),
        Ok(path) => {
            let endpoints = [Point::new(1, 2), Point::new(11, 3)];
            println!("{}", CellGrid::build(&walls, &endpoints));
            println!("Path:");
            for p in path {
                println!("{}", p);
            }
        }
        Err(error) => println!("Error {}: {}", error.code(), error),
    }
}
