//! Fixed pool of persistent workers pulling rows from a closable queue.
//!
//! The queue carries row assignments rather than bare indices: each queued
//! [`RowMut`](super::RowMut) is the exclusive write region for that row, and
//! the queue hands every item to exactly one worker. A fast worker simply
//! takes the next row, so load balances without a static split.

use std::thread;

use super::rules::evolve_row;
use super::work_queue;
use super::{CellSlot, Grid};

/// Worker count used when none is configured
pub const DEFAULT_WORKERS: usize = 8;

/// Compute the next generation with [`DEFAULT_WORKERS`] workers
pub fn compute_next_generation<T: CellSlot>(current: &Grid, next: &mut Grid<T>) {
    compute_next_generation_with(current, next, DEFAULT_WORKERS);
}

/// Compute the next generation with `workers` workers (at least one).
///
/// Workers start before the queue is filled and block on it until rows
/// arrive. The call returns once the queue is closed and every worker has
/// drained it. A panic in any worker is re-raised here.
pub fn compute_next_generation_with<T: CellSlot>(
    current: &Grid,
    next: &mut Grid<T>,
    workers: usize,
) {
    assert!(
        current.same_dimensions(next),
        "generation grids differ in size: {:?} vs {:?}",
        current.dimensions(),
        next.dimensions()
    );

    let workers = workers.max(1);
    let (tx, rx) = work_queue::with_capacity(next.rows());

    thread::scope(|s| {
        for id in 0..workers {
            let rx = rx.clone();
            s.spawn(move || {
                let mut processed = 0usize;
                while let Some(mut row) = rx.pop() {
                    evolve_row(current, &mut row);
                    processed += 1;
                }
                log::trace!("worker {id} exiting after {processed} rows");
            });
        }

        for row in next.rows_mut() {
            tx.push(row);
        }
        tx.close();
    });
}
