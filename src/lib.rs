//! # waypoint_pathfinding
//!
//! A grid-based pathfinding system. Implements
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) on a 4-connected grid with uniform step
//! cost, where nodes that are equally promising are ordered by how close they lie to an ordered
//! list of waypoints. This lets a caller sketch a rough route and get back the shortest path that
//! follows it best, without ever trading away optimality.
//!
//! Every search is a fresh, synchronous computation owning its own node table, open set and
//! waypoint copy; the [PathingGrid] is only read. The
//! [orchestrator](solver::orchestrator) runs a search per heuristic configuration so results can
//! be compared.
//!
//! ```
//! use waypoint_pathfinding::{Point, PathingGrid, SearchRequest, WaypointSolver};
//!
//! let grid = PathingGrid::from_rows(&["....", ".##.", "...."]).unwrap();
//! let request = SearchRequest::new(Point::new(0, 0), Point::new(3, 2))
//!     .with_waypoints([Point::new(3, 0)]);
//! let result = WaypointSolver::new().find_path(&grid, &request).unwrap();
//! assert_eq!(result.path.len(), 6);
//! assert!(result.path.contains(&Point::new(3, 0)));
//! ```
pub mod astar_waypoints;
pub mod error;
pub mod pathing_grid;
pub mod solver;
pub mod waypoints;

pub use grid_util::{Point, ValueGrid};
use itertools::Itertools;

pub use crate::astar_waypoints::SearchNode;
pub use crate::error::{PlanError, Result};
pub use crate::pathing_grid::PathingGrid;
pub use crate::solver::heuristic::{Heuristic, Metric};
pub use crate::solver::orchestrator::{compare, compare_default, default_configs, SolverConfig};
pub use crate::solver::{NodeTable, SearchRequest, SearchResult, WaypointSolver};
pub use crate::waypoints::WaypointTrail;

/// A cell of the grid.
pub type Cell = Point;

/// Cost of a single axis-aligned step.
pub const STEP_COST: i32 = 1;
/// Inline capacity of neighbourhood vectors, one slot per direction.
pub const N_SMALLVEC_SIZE: usize = 4;
/// A sampled cell must be further than this (Manhattan) from the last waypoint to be recorded.
pub const MIN_WAYPOINT_SPACING: i32 = 2;

/// Checks that every step of the path moves exactly one cell along one axis.
pub fn is_contiguous(path: &[Point]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| a.manhattan_distance(b) == STEP_COST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contiguity() {
        let straight = [Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)];
        assert!(is_contiguous(&straight));
        assert!(is_contiguous(&[]));
        assert!(is_contiguous(&straight[..1]));
        assert!(!is_contiguous(&[Point::new(0, 0), Point::new(1, 1)]));
        assert!(!is_contiguous(&[Point::new(0, 0), Point::new(0, 0)]));
        assert!(!is_contiguous(&[Point::new(0, 0), Point::new(2, 0)]));
    }
}
