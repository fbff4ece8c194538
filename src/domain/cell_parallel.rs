//! One task per cell.
//!
//! Deliberately the worst case for scheduling overhead: a 3000x3000 grid
//! spawns nine million tasks onto the rayon pool. Each task owns exactly one
//! destination slot, handed out by [`Grid::rows_mut`] and split per cell, so
//! the writes need no synchronization; the enclosing scope is the barrier.

use super::rules::next_state;
use super::{CellSlot, Grid};

pub fn compute_next_generation<T: CellSlot>(current: &Grid, next: &mut Grid<T>) {
    assert!(
        current.same_dimensions(next),
        "generation grids differ in size: {:?} vs {:?}",
        current.dimensions(),
        next.dimensions()
    );

    rayon::scope(|s| {
        for row in next.rows_mut() {
            let index = row.index();
            for (col, slot) in row.into_cells().iter_mut().enumerate() {
                s.spawn(move |_| slot.store(next_state(current, index, col)));
            }
        }
    });
}
