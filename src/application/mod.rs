mod config;
mod engine;

pub use config::{DEFAULT_DENSITY, DEFAULT_SIZE, RunConfig, Seed};
pub use engine::{Engine, StepReport};
