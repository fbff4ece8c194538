mod cell;
mod grid;
mod patterns;
pub mod rules;
mod strategy;
pub mod work_queue;

pub mod cell_parallel;
pub mod row_parallel;
pub mod sequential;
pub mod worker_pool;

pub use cell::{Cell, CellSlot, TrackedCell};
pub use grid::{Grid, RowMut};
pub use patterns::{Pattern, presets};
pub use rules::{count_live_neighbors, next_state};
pub use strategy::Strategy;
pub use work_queue::QueueStatus;
