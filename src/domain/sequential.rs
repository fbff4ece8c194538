//! Baseline sweep on the calling thread.

use super::rules::next_state;
use super::{CellSlot, Grid};

/// Compute the next generation row-major on a single thread.
///
/// This is the reference output every concurrent strategy must match.
pub fn compute_next_generation<T: CellSlot>(current: &Grid, next: &mut Grid<T>) {
    assert!(
        current.same_dimensions(next),
        "generation grids differ in size: {:?} vs {:?}",
        current.dimensions(),
        next.dimensions()
    );

    for mut row in next.rows_mut() {
        let index = row.index();
        for (col, slot) in row.cells().iter_mut().enumerate() {
            slot.store(next_state(current, index, col));
        }
    }
}
