//! Error types for waypoint_pathfinding

use grid_util::Point;
use thiserror::Error;

/// Failures surfaced to the caller. An unreachable goal is not one of them, it is reported as an
/// empty path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("cell {cell} is outside the {width}x{height} grid")]
    OutOfBounds {
        cell: Point,
        width: usize,
        height: usize,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown heuristic metric: {0}")]
    UnknownMetric(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
