//! The Game of Life transition rule (B3/S23) over a bounded, non-wrapping grid.

use super::{Cell, CellSlot, Grid, RowMut};

/// Count live neighbors of `(row, col)`.
///
/// Only the in-bounds positions of the 3x3 neighborhood are visited: the grid
/// does not wrap, so edge cells have 5 candidates and corner cells 3.
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (rows, cols) = grid.dimensions();
    let row_span = row.saturating_sub(1)..=(row + 1).min(rows - 1);
    let col_span = col.saturating_sub(1)..=(col + 1).min(cols - 1);

    row_span
        .flat_map(|r| col_span.clone().map(move |c| (r, c)))
        .filter(|&(r, c)| (r, c) != (row, col))
        .filter(|&(r, c)| grid.is_alive(r, c))
        .count() as u8
}

/// Next state of the cell at `(row, col)`, read from an unchanging snapshot.
///
/// Coordinates must be in bounds.
#[inline]
pub fn next_state(grid: &Grid, row: usize, col: usize) -> Cell {
    let current = grid.row(row)[col];
    current.evolve(count_live_neighbors(grid, row, col))
}

/// Write the successor of every cell of one row into its assigned region.
pub(crate) fn evolve_row<T: CellSlot>(current: &Grid, row: &mut RowMut<'_, T>) {
    let index = row.index();
    for (col, slot) in row.cells().iter_mut().enumerate() {
        slot.store(next_state(current, index, col));
    }
}
