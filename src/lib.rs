// Domain layer - grid, transition rule and the update strategies
pub mod domain;

// Application layer - configuration and step coordination
pub mod application;

// Infrastructure layer - text output
pub mod rendering;

pub mod error;

// Re-exports for convenience
pub use application::{Engine, RunConfig, Seed, StepReport};
pub use domain::{Cell, CellSlot, Grid, Pattern, Strategy, TrackedCell, presets};
pub use error::{LifeError, Result};
