use grid_util::Point;
use log::debug;

use crate::astar_waypoints::{astar_waypoints, FxIndexMap, SearchNode};
use crate::error::Result;
use crate::pathing_grid::PathingGrid;
use crate::waypoints::WaypointCursor;

pub mod heuristic;
pub mod orchestrator;

use heuristic::{Heuristic, Metric};

/// Per-cell search records of one run, in discovery order.
pub type NodeTable = FxIndexMap<Point, SearchNode<Point>>;

/// What to search for. The waypoints are a rough route the path should prefer among equally short
/// alternatives; every search works on its own copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub start: Point,
    pub end: Point,
    pub waypoints: Vec<Point>,
}

impl SearchRequest {
    pub fn new(start: Point, end: Point) -> SearchRequest {
        SearchRequest {
            start,
            end,
            waypoints: Vec::new(),
        }
    }

    pub fn with_waypoints(mut self, waypoints: impl IntoIterator<Item = Point>) -> SearchRequest {
        self.waypoints = waypoints.into_iter().collect();
        self
    }
}

/// Output of a single search. Owned by the caller, the solver keeps nothing.
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// Name of the configuration that produced this result, empty when run directly.
    pub label: String,
    /// Start to end, empty if the end could not be reached.
    pub path: Vec<Point>,
    pub nodes: NodeTable,
    pub expansions: usize,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Cost of the found path.
    pub fn cost(&self) -> Option<i32> {
        self.path
            .last()
            .and_then(|cell| self.nodes.get(cell))
            .map(|node| node.g)
    }

    /// Number of cells that received a search record.
    pub fn explored(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, cell: &Point) -> Option<&SearchNode<Point>> {
        self.nodes.get(cell)
    }

    pub fn parent(&self, node: &SearchNode<Point>) -> Option<&SearchNode<Point>> {
        node.parent
            .and_then(|ix| self.nodes.get_index(ix))
            .map(|(_, parent)| parent)
    }
}

/// A* on a 4-grid with uniform step cost, ordering the open set by `f` and breaking ties with the
/// secondary heuristic's distance to the nearest upcoming waypoint. Without a secondary heuristic
/// the tie-break score is infinite for every node and the search is plain A*.
#[derive(Clone, Debug)]
pub struct WaypointSolver<P = Metric, S = Metric> {
    pub primary: P,
    pub secondary: Option<S>,
}

impl WaypointSolver {
    /// Manhattan distance to the goal, squared distance to the waypoints.
    pub fn new() -> WaypointSolver {
        WaypointSolver {
            primary: Metric::Manhattan,
            secondary: Some(Metric::SquaredEuclidean),
        }
    }
}

impl Default for WaypointSolver {
    fn default() -> Self {
        WaypointSolver::new()
    }
}

impl<P: Heuristic> WaypointSolver<P, Metric> {
    /// A solver that ignores waypoints.
    pub fn plain(primary: P) -> WaypointSolver<P, Metric> {
        WaypointSolver {
            primary,
            secondary: None,
        }
    }
}

impl<P: Heuristic, S: Heuristic> WaypointSolver<P, S> {
    pub fn with_heuristics(primary: P, secondary: Option<S>) -> WaypointSolver<P, S> {
        WaypointSolver { primary, secondary }
    }

    /// Computes a path from `request.start` to `request.end`.
    ///
    /// Start, end and waypoints must lie on the grid. Blocked start or end cells are not
    /// rejected; a blocked end is simply never reached, a blocked start still gets expanded.
    pub fn find_path(&self, grid: &PathingGrid, request: &SearchRequest) -> Result<SearchResult> {
        grid.check(&request.start)?;
        let end = grid.check(&request.end)?;
        for waypoint in &request.waypoints {
            grid.check(waypoint)?;
        }

        let mut cursor = WaypointCursor::new(&request.waypoints);
        let outcome = astar_waypoints(
            &request.start,
            |cell| grid.passable_neighbors(cell),
            |cell| self.primary.estimate(&end, cell),
            |cell| match &self.secondary {
                Some(secondary) => cursor.affinity(cell, secondary),
                None => f64::INFINITY,
            },
            |cell| *cell == end,
        );
        debug!(
            "{} -> {}: path of {} cells, {} waypoints left unconsumed",
            request.start,
            end,
            outcome.path.len(),
            cursor.remaining().len()
        );
        Ok(SearchResult {
            label: String::new(),
            path: outcome.path,
            nodes: outcome.nodes,
            expansions: outcome.expansions,
        })
    }
}
