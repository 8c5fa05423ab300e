//! Runs the solver under several named heuristic configurations so their results can be compared
//! side by side. Runs never share state beyond the read-only grid.
use log::info;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::heuristic::Metric;
use super::{SearchRequest, SearchResult, WaypointSolver};
use crate::error::Result;
use crate::pathing_grid::PathingGrid;

pub const DEFAULT_LABEL: &str = "default";
pub const WAYPOINTS_MANHATTAN_LABEL: &str = "primary: default, waypoints: manhattan";
pub const WAYPOINTS_DISABLED_LABEL: &str = "primary: default, waypoints: disabled";

/// A labelled heuristic selection. `secondary: None` disables waypoint tie-breaking.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverConfig {
    pub label: String,
    pub primary: Metric,
    pub secondary: Option<Metric>,
}

impl SolverConfig {
    pub fn new(label: impl Into<String>, primary: Metric, secondary: Option<Metric>) -> Self {
        SolverConfig {
            label: label.into(),
            primary,
            secondary,
        }
    }

    pub fn solver(&self) -> WaypointSolver {
        WaypointSolver::with_heuristics(self.primary, self.secondary)
    }

    /// Runs a fresh search and labels the result with this configuration's name.
    pub fn run(&self, grid: &PathingGrid, request: &SearchRequest) -> Result<SearchResult> {
        let mut result = self.solver().find_path(grid, request)?;
        result.label = self.label.clone();
        info!(
            "{}: {} cells, {} explored",
            result.label,
            result.path.len(),
            result.explored()
        );
        Ok(result)
    }
}

/// The three standard configurations: squared-distance waypoints, Manhattan waypoints and no
/// waypoints, all with a Manhattan primary heuristic.
pub fn default_configs() -> [SolverConfig; 3] {
    [
        SolverConfig::new(
            DEFAULT_LABEL,
            Metric::Manhattan,
            Some(Metric::SquaredEuclidean),
        ),
        SolverConfig::new(
            WAYPOINTS_MANHATTAN_LABEL,
            Metric::Manhattan,
            Some(Metric::Manhattan),
        ),
        SolverConfig::new(WAYPOINTS_DISABLED_LABEL, Metric::Manhattan, None),
    ]
}

/// Runs every configuration in order, stopping at the first invalid input.
pub fn compare(
    grid: &PathingGrid,
    request: &SearchRequest,
    configs: &[SolverConfig],
) -> Result<Vec<SearchResult>> {
    configs.iter().map(|config| config.run(grid, request)).collect()
}

/// [compare] with the [default_configs].
pub fn compare_default(grid: &PathingGrid, request: &SearchRequest) -> Result<Vec<SearchResult>> {
    compare(grid, request, &default_configs())
}

/// [compare] on the rayon thread pool. Results keep the order of `configs`.
#[cfg(feature = "parallel")]
pub fn compare_parallel(
    grid: &PathingGrid,
    request: &SearchRequest,
    configs: &[SolverConfig],
) -> Result<Vec<SearchResult>> {
    use rayon::prelude::*;
    configs
        .par_iter()
        .map(|config| config.run(grid, request))
        .collect()
}
