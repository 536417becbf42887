//! Algorithm enum for selecting the evolution implementation.

use super::{Grid, transition};
use serde::Deserialize;

/// Available evolution strategies. Both produce identical generations;
/// they trade thread overhead against throughput on large boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Cell-by-cell on the calling thread
    Serial,
    /// Rows evaluated in parallel with rayon
    #[default]
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Short description for tooltips/info
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "One cell at a time, single thread",
            Algorithm::Parallel => "Rows split across the rayon pool",
        }
    }

    /// Compute the next generation of `grid` with this strategy
    pub fn evolve(&self, grid: &Grid) -> Grid {
        match self {
            Algorithm::Serial => transition::next_generation(grid),
            Algorithm::Parallel => transition::next_generation_parallel(grid),
        }
    }
}
