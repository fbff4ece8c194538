use std::time::{Duration, Instant};

use crate::domain::{CellSlot, Grid, Strategy};

use super::RunConfig;

/// Outcome of one generation step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepReport {
    pub strategy: Strategy,
    pub generation: u64,
    pub rows: usize,
    pub cols: usize,
    pub elapsed: Duration,
}

impl StepReport {
    /// Throughput in millions of cells per second
    pub fn mcells_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        (self.rows * self.cols) as f64 / secs / 1_000_000.0
    }
}

/// Engine coordinates a single selected strategy.
///
/// It never owns the grids: the caller allocates both buffers and rotates
/// them between steps if it wants more than one generation.
#[derive(Clone, Debug)]
pub struct Engine {
    strategy: Strategy,
    workers: usize,
    generation: u64,
}

impl Engine {
    pub fn new(strategy: Strategy, workers: usize) -> Self {
        Self {
            strategy,
            workers: workers.max(1),
            generation: 0,
        }
    }

    /// Build from a validated config; fails with a usage error if no strategy is set
    pub fn from_config(config: &RunConfig) -> crate::Result<Self> {
        Ok(Self::new(config.require_strategy()?, config.workers))
    }

    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub const fn workers(&self) -> usize {
        self.workers
    }

    /// Generations stepped so far
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Fully overwrite `next` with the successor of `current`
    pub fn step<T: CellSlot>(&mut self, current: &Grid, next: &mut Grid<T>) -> StepReport {
        let (rows, cols) = current.dimensions();
        log::debug!(
            "generation {}: {} over {rows}x{cols} ({} workers)",
            self.generation,
            self.strategy,
            self.workers
        );

        let start = Instant::now();
        self.strategy.compute_next_generation(current, next, self.workers);
        let elapsed = start.elapsed();

        self.generation += 1;
        log::debug!("generation {} computed in {elapsed:?}", self.generation);

        StepReport {
            strategy: self.strategy,
            generation: self.generation,
            rows,
            cols,
            elapsed,
        }
    }
}
