//! Run configuration: grid size, worker count and starting pattern.

use std::fs;
use std::path::Path;

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::domain::{Grid, Pattern, Strategy, presets, worker_pool};
use crate::error::{LifeError, Result};

/// Default grid edge length in cells
pub const DEFAULT_SIZE: usize = 3000;

/// Default alive probability for random seeding
pub const DEFAULT_DENSITY: f64 = 0.3;

/// Offset of preset patterns from the top-left corner
const SEED_OFFSET: (usize, usize) = (1, 1);

/// Starting state of the current generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Seed {
    #[default]
    Glider,
    Blinker,
    Block,
    Toad,
    Beacon,
    Lwss,
    RPentomino,
    /// Every cell alive with probability `density`
    Random,
    /// All cells dead
    Empty,
}

impl Seed {
    /// Preset pattern for this seed, if it is one
    pub fn pattern(self) -> Option<Pattern> {
        match self {
            Seed::Glider => Some(presets::glider()),
            Seed::Blinker => Some(presets::blinker()),
            Seed::Block => Some(presets::block()),
            Seed::Toad => Some(presets::toad()),
            Seed::Beacon => Some(presets::beacon()),
            Seed::Lwss => Some(presets::lwss()),
            Seed::RPentomino => Some(presets::r_pentomino()),
            Seed::Random | Seed::Empty => None,
        }
    }
}

fn default_size() -> usize {
    DEFAULT_SIZE
}

fn default_workers() -> usize {
    worker_pool::DEFAULT_WORKERS
}

fn default_density() -> f64 {
    DEFAULT_DENSITY
}

/// Everything needed to run one generation step.
///
/// Every field has a default, so a JSON file may name only what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Strategy to run; there is no default and a run without one is a usage error.
    #[serde(default)]
    pub strategy: Option<Strategy>,
    #[serde(default = "default_size")]
    pub rows: usize,
    #[serde(default = "default_size")]
    pub cols: usize,
    /// Worker count for the worker-pool strategy.
    #[serde(default = "default_workers")]
    pub workers: usize,
    #[serde(default)]
    pub seed: Seed,
    /// Alive probability for [`Seed::Random`].
    #[serde(default = "default_density")]
    pub density: f64,
    /// Fixed RNG seed for reproducible random grids.
    #[serde(default)]
    pub rng_seed: Option<u64>,
    /// Render the next generation to stdout after the step.
    #[serde(default)]
    pub print: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            strategy: None,
            rows: DEFAULT_SIZE,
            cols: DEFAULT_SIZE,
            workers: worker_pool::DEFAULT_WORKERS,
            seed: Seed::default(),
            density: DEFAULT_DENSITY,
            rng_seed: None,
            print: false,
        }
    }
}

impl RunConfig {
    /// Load a configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| LifeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| LifeError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LifeError::InvalidConfig(format!(
                "grid dimensions must be positive, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.rows.checked_mul(self.cols).is_none() {
            return Err(LifeError::InvalidConfig(format!(
                "grid of {}x{} cells is too large to allocate",
                self.rows, self.cols
            )));
        }
        if self.workers == 0 {
            return Err(LifeError::InvalidConfig("worker count must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(LifeError::InvalidConfig(format!(
                "density must be within [0, 1], got {}",
                self.density
            )));
        }
        Ok(())
    }

    /// The selected strategy, or the usage error when none was chosen
    pub fn require_strategy(&self) -> Result<Strategy> {
        self.strategy.ok_or(LifeError::MissingMethod)
    }

    /// Allocate and seed the starting grid
    pub fn initial_grid(&self) -> Result<Grid> {
        let mut grid = Grid::new(self.rows, self.cols);
        match self.seed {
            Seed::Empty => {}
            Seed::Random => match self.rng_seed {
                Some(seed) => grid.randomize(&mut StdRng::seed_from_u64(seed), self.density),
                None => grid.randomize(&mut rand::rng(), self.density),
            },
            preset => {
                if let Some(pattern) = preset.pattern() {
                    pattern.place_on(&mut grid, SEED_OFFSET.0, SEED_OFFSET.1)?;
                }
            }
        }
        log::debug!(
            "seeded {}x{} grid with {:?}: {} live cells",
            self.rows,
            self.cols,
            self.seed,
            grid.live_count()
        );
        Ok(grid)
    }
}
