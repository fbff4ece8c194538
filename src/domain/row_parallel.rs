//! One task per row; each task sweeps its row sequentially.

use super::rules::evolve_row;
use super::{CellSlot, Grid};

pub fn compute_next_generation<T: CellSlot>(current: &Grid, next: &mut Grid<T>) {
    assert!(
        current.same_dimensions(next),
        "generation grids differ in size: {:?} vs {:?}",
        current.dimensions(),
        next.dimensions()
    );

    rayon::scope(|s| {
        for mut row in next.rows_mut() {
            s.spawn(move |_| evolve_row(current, &mut row));
        }
    });
}
