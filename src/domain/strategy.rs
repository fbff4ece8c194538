//! Strategy enum for selecting how a generation is computed.
//!
//! The four strategies produce bit-identical output and differ only in how
//! the sweep is split across concurrent tasks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{CellSlot, Grid, cell_parallel, row_parallel, sequential, worker_pool};
use crate::error::LifeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Single thread, row-major
    Sequential,
    /// One task per cell
    CellParallel,
    /// One task per row
    RowParallel,
    /// Fixed workers pulling rows from a shared queue
    WorkerPool,
}

impl Strategy {
    /// Get all strategies in method-number order
    pub fn all() -> Vec<Strategy> {
        vec![
            Strategy::Sequential,
            Strategy::CellParallel,
            Strategy::RowParallel,
            Strategy::WorkerPool,
        ]
    }

    /// Identifier used on the command line and in config files
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::CellParallel => "cell-parallel",
            Strategy::RowParallel => "row-parallel",
            Strategy::WorkerPool => "worker-pool",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Strategy::Sequential => "update cells sequentially",
            Strategy::CellParallel => "update all cells using one task per cell",
            Strategy::RowParallel => "update each row using one task per row",
            Strategy::WorkerPool => "fixed workers, each processing one row at a time",
        }
    }

    /// Method number accepted by `-m`
    pub fn method(&self) -> u32 {
        match self {
            Strategy::Sequential => 1,
            Strategy::CellParallel => 2,
            Strategy::RowParallel => 3,
            Strategy::WorkerPool => 4,
        }
    }

    pub fn from_method(method: u32) -> Result<Self, LifeError> {
        Self::all()
            .into_iter()
            .find(|s| s.method() == method)
            .ok_or(LifeError::UnknownMethod(method))
    }

    /// Run this strategy once. `workers` only matters for [`Strategy::WorkerPool`].
    pub fn compute_next_generation<T: CellSlot>(self, current: &Grid, next: &mut Grid<T>, workers: usize) {
        match self {
            Strategy::Sequential => sequential::compute_next_generation(current, next),
            Strategy::CellParallel => cell_parallel::compute_next_generation(current, next),
            Strategy::RowParallel => row_parallel::compute_next_generation(current, next),
            Strategy::WorkerPool => worker_pool::compute_next_generation_with(current, next, workers),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either a strategy name or its method number
impl FromStr for Strategy {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(method) = s.parse::<u32>() {
            return Self::from_method(method);
        }
        Self::all()
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| LifeError::UnknownStrategy(s.to_string()))
    }
}
