use grid_util::{Point, Rect, ValueGrid};
use waypoint_pathfinding::solver::orchestrator::{
    DEFAULT_LABEL, WAYPOINTS_DISABLED_LABEL, WAYPOINTS_MANHATTAN_LABEL,
};
use waypoint_pathfinding::{
    compare_default, is_contiguous, Metric, PathingGrid, SearchRequest, WaypointSolver,
};

fn solve(grid: &PathingGrid, request: &SearchRequest) -> Vec<Point> {
    WaypointSolver::new().find_path(grid, request).unwrap().path
}

#[test]
fn open_grid_paths_are_manhattan_optimal() {
    let grid = PathingGrid::new(7, 5, false);
    for (sx, sy, ex, ey) in [(0, 0, 6, 4), (6, 4, 0, 0), (3, 2, 3, 4), (1, 4, 5, 0)] {
        let start = Point::new(sx, sy);
        let end = Point::new(ex, ey);
        let path = solve(&grid, &SearchRequest::new(start, end));
        assert_eq!(
            path.len() as i32,
            (sx - ex).abs() + (sy - ey).abs() + 1,
            "{start} -> {end}"
        );
        assert!(is_contiguous(&path));
    }
}

#[test]
fn five_by_five_corner_to_corner() {
    let grid = PathingGrid::new(5, 5, false);
    let result = WaypointSolver::with_heuristics(Metric::Manhattan, Some(Metric::SquaredEuclidean))
        .find_path(&grid, &SearchRequest::new(Point::new(0, 0), Point::new(4, 4)))
        .unwrap();
    assert_eq!(result.path.len(), 9);
    let costs: Vec<i32> = result
        .path
        .iter()
        .map(|p| result.node(p).unwrap().g)
        .collect();
    assert!(costs.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!((costs[0], costs[8]), (0, 8));
}

#[test]
fn detour_around_centre_block() {
    let mut grid = PathingGrid::new(3, 3, false);
    grid.set(1, 1, true);
    let path = solve(&grid, &SearchRequest::new(Point::new(0, 0), Point::new(2, 2)));
    assert_eq!(path.len(), 5);
    assert!(!path.contains(&Point::new(1, 1)));
    assert!(is_contiguous(&path));
}

#[test]
fn waypoint_never_costs_optimality() {
    let grid = PathingGrid::new(5, 1, false);
    let request = SearchRequest::new(Point::new(0, 0), Point::new(4, 0))
        .with_waypoints([Point::new(2, 0)]);
    let result = WaypointSolver::with_heuristics(Metric::Manhattan, Some(Metric::Manhattan))
        .find_path(&grid, &request)
        .unwrap();
    let expected: Vec<Point> = (0..5).map(|x| Point::new(x, 0)).collect();
    assert_eq!(result.path, expected);
}

#[test]
fn off_route_waypoint_is_not_visited_at_extra_cost() {
    // The waypoint sits behind the start, honouring it would lengthen the path.
    let grid = PathingGrid::new(6, 3, false);
    let request = SearchRequest::new(Point::new(2, 1), Point::new(5, 1))
        .with_waypoints([Point::new(0, 1)]);
    let path = solve(&grid, &request);
    assert_eq!(path.len(), 4);
    assert!(!path.contains(&Point::new(0, 1)));
}

#[test]
fn start_equals_end() {
    let grid = PathingGrid::new(3, 3, false);
    let p = Point::new(1, 2);
    for result in compare_default(&grid, &SearchRequest::new(p, p).with_waypoints([p])).unwrap() {
        assert_eq!(result.path, vec![p]);
    }
}

#[test]
fn sealed_goal_is_unreachable() {
    let mut grid = PathingGrid::new(7, 7, false);
    grid.set_rect(Rect::new(3, 3, 3, 3), true);
    grid.set(4, 4, false);
    grid.update();
    let start = Point::new(0, 0);
    let end = Point::new(4, 4);
    assert!(grid.unreachable(&start, &end));
    for result in compare_default(&grid, &SearchRequest::new(start, end)).unwrap() {
        assert!(result.path.is_empty(), "{}", result.label);
        assert!(!result.found());
        assert!(result.node(&end).is_none());
    }
}

#[test]
fn comparison_returns_three_labelled_runs() {
    let grid = PathingGrid::from_rows(&[
        "..........",
        ".####.....",
        "....#..##.",
        "..#.#...#.",
        "..#......."
    ])
    .unwrap();
    let request = SearchRequest::new(Point::new(9, 4), Point::new(0, 4)).with_waypoints([
        Point::new(9, 0),
        Point::new(5, 0),
        Point::new(0, 0),
    ]);
    let results = compare_default(&grid, &request).unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].label, DEFAULT_LABEL);
    assert_eq!(results[1].label, WAYPOINTS_MANHATTAN_LABEL);
    assert_eq!(results[2].label, WAYPOINTS_DISABLED_LABEL);
    let lengths: Vec<usize> = results.iter().map(|r| r.path.len()).collect();
    assert!(lengths.iter().all(|&len| len == lengths[0]), "{lengths:?}");
    for result in &results {
        assert!(is_contiguous(&result.path));
        assert!(result.path.iter().all(|p| !grid.is_blocked(p)));
    }
}

#[test]
fn scattered_obstacles() {
    let mut grid = PathingGrid::new(10, 10, false);
    for (x, y) in [(1, 1), (5, 0), (0, 5), (8, 8)] {
        grid.set(x, y, true);
    }
    let result = WaypointSolver::new()
        .find_path(&grid, &SearchRequest::new(Point::new(0, 0), Point::new(7, 7)))
        .unwrap();
    assert_eq!(result.path.len(), 15);
    assert_eq!(result.cost(), Some(14));
}
