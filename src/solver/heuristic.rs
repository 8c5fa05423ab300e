use core::fmt;
use std::str::FromStr;

use grid_util::Point;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// A distance estimate between two cells. Implementations must return a non-negative, non-NaN
/// value. Any `Fn(&Point, &Point) -> f64` closure is a heuristic as well.
pub trait Heuristic {
    fn estimate(&self, a: &Point, b: &Point) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(&Point, &Point) -> f64,
{
    fn estimate(&self, a: &Point, b: &Point) -> f64 {
        self(a, b)
    }
}

/// The named heuristics that can be selected by configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Metric {
    /// `|dx| + |dy|`, exact on an empty 4-grid.
    Manhattan,
    /// `dx² + dy²`
    #[cfg_attr(feature = "serde", serde(rename = "square"))]
    SquaredEuclidean,
    Euclidean,
}

impl Metric {
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Manhattan => "manhattan",
            Metric::SquaredEuclidean => "square",
            Metric::Euclidean => "euclidean",
        }
    }
}

fn square_distance(a: &Point, b: &Point) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    dx * dx + dy * dy
}

impl Heuristic for Metric {
    fn estimate(&self, a: &Point, b: &Point) -> f64 {
        match self {
            Metric::Manhattan => a.manhattan_distance(b) as f64,
            Metric::SquaredEuclidean => square_distance(a, b),
            Metric::Euclidean => square_distance(a, b).sqrt(),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Metric::Manhattan),
            "square" | "squared" | "squared_euclidean" => Ok(Metric::SquaredEuclidean),
            "euclidean" => Ok(Metric::Euclidean),
            _ => Err(PlanError::UnknownMetric(s.to_owned())),
        }
    }
}
