use waypoint_pathfinding::{compare_default, PathingGrid, Point, SearchRequest, SearchResult};

/// Runs the three standard heuristic configurations on a small map and prints each path.
/// A route is sketched along the top of the map with waypoints (`o`); the configurations using
/// waypoints prefer it while the one with waypoints disabled is free to take any shortest path.
///
///  __________
/// |S..o..o..o|
/// |.####.###.|
/// |....#...#.|
/// |.##.#.#.#.|
/// |......#..E|
///  __________
fn main() {
    let pathing_grid = PathingGrid::from_rows(&[
        "..........",
        ".####.###.",
        "....#...#.",
        ".##.#.#.#.",
        "......#...",
    ])
    .unwrap();
    let start = Point::new(0, 0);
    let end = Point::new(9, 4);
    let request = SearchRequest::new(start, end).with_waypoints([
        Point::new(3, 0),
        Point::new(6, 0),
        Point::new(9, 0),
    ]);
    println!("{}", pathing_grid);
    for result in compare_default(&pathing_grid, &request).unwrap() {
        println!(
            "{}: {} cells, {} explored",
            result.label,
            result.path.len(),
            result.explored()
        );
        print_result(&pathing_grid, &request, &result);
    }
}

fn print_result(grid: &PathingGrid, request: &SearchRequest, result: &SearchResult) {
    let rows = grid.to_string();
    for (y, row) in rows.lines().enumerate() {
        let line = row
            .chars()
            .enumerate()
            .map(|(x, c)| {
                let p = Point::new(x as i32, y as i32);
                if p == request.start {
                    'S'
                } else if p == request.end {
                    'E'
                } else if result.path.contains(&p) {
                    '*'
                } else if request.waypoints.contains(&p) {
                    'o'
                } else {
                    c
                }
            })
            .collect::<String>();
        println!("{}", line);
    }
    println!();
}
