use waypoint_pathfinding::{PathingGrid, Point, SearchRequest, WaypointSolver, WaypointTrail};

/// Emulates dragging the end of a path across the map: every pointer sample moves the end and
/// offers itself to the waypoint trail, and a fresh search runs for each sample.
fn main() {
    let pathing_grid = PathingGrid::from_rows(&[
        "........",
        "..####..",
        "..#..#..",
        "..#.....",
        "........",
    ])
    .unwrap();
    let solver = WaypointSolver::new();
    let start = Point::new(0, 2);
    let mut trail = WaypointTrail::new();
    let samples = (0..8)
        .map(|x| Point::new(x, 0))
        .chain((1..5).map(|y| Point::new(7, y)))
        .chain((4..7).rev().map(|x| Point::new(x, 4)));
    for end in samples {
        trail.push(end);
        let request = SearchRequest::new(start, end).with_waypoints(trail.as_slice().to_vec());
        let result = solver.find_path(&pathing_grid, &request).unwrap();
        println!(
            "end {}: {} waypoints, path {:?}",
            end,
            trail.len(),
            result.path
        );
    }
}
