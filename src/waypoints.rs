use grid_util::Point;
use itertools::Itertools;

use crate::solver::heuristic::Heuristic;
use crate::MIN_WAYPOINT_SPACING;

/// The working copy of a waypoint sequence during one search. Waypoints are consumed front to
/// back: once a later waypoint is the closest one to an evaluated cell, the earlier ones are gone
/// for the remainder of the search.
#[derive(Clone, Debug)]
pub(crate) struct WaypointCursor<'a> {
    waypoints: &'a [Point],
    next: usize,
}

impl<'a> WaypointCursor<'a> {
    pub(crate) fn new(waypoints: &'a [Point]) -> Self {
        WaypointCursor { waypoints, next: 0 }
    }

    pub(crate) fn remaining(&self) -> &'a [Point] {
        &self.waypoints[self.next..]
    }

    /// Distance from `cell` to the closest remaining waypoint, the first one winning ties.
    /// Waypoints before the closest one are dropped. Without waypoints the affinity is infinite.
    pub(crate) fn affinity<H: Heuristic + ?Sized>(&mut self, cell: &Point, heuristic: &H) -> f64 {
        let remaining = self.remaining();
        let Some(ix) = remaining
            .iter()
            .map(|waypoint| heuristic.estimate(waypoint, cell))
            .position_min_by(|a, b| a.total_cmp(b))
        else {
            return f64::INFINITY;
        };
        let distance = heuristic.estimate(&remaining[ix], cell);
        self.next += ix;
        distance
    }
}

/// Collects waypoints from a stream of sampled cells, such as successive pointer positions while
/// dragging out a route. A sample only becomes a waypoint when it lies more than
/// [MIN_WAYPOINT_SPACING] steps (Manhattan) from the previous waypoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WaypointTrail {
    waypoints: Vec<Point>,
}

impl WaypointTrail {
    pub fn new() -> WaypointTrail {
        WaypointTrail::default()
    }

    /// Offers a sample to the trail, returns whether it was kept.
    pub fn push(&mut self, cell: Point) -> bool {
        let keep = self
            .waypoints
            .last()
            .map_or(true, |last| last.manhattan_distance(&cell) > MIN_WAYPOINT_SPACING);
        if keep {
            self.waypoints.push(cell);
        }
        keep
    }

    pub fn clear(&mut self) {
        self.waypoints.clear();
    }

    pub fn last(&self) -> Option<&Point> {
        self.waypoints.last()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.waypoints
    }

    pub fn into_vec(self) -> Vec<Point> {
        self.waypoints
    }
}

impl Extend<Point> for WaypointTrail {
    fn extend<T: IntoIterator<Item = Point>>(&mut self, iter: T) {
        for cell in iter {
            self.push(cell);
        }
    }
}
