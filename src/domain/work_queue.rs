//! Closable multi-consumer work queue.
//!
//! A single [`Sender`] fills the queue and then closes it; any number of
//! cloned [`Receiver`]s pop items until the queue is closed and drained.
//! Each item is handed to exactly one receiver.

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

/// Observable lifecycle of a queue
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueStatus {
    /// Accepting and yielding items
    Open,
    /// No further items will arrive; buffered items remain
    Closed,
    /// Closed and empty; every pop returns `None`
    Drained,
}

struct State<T> {
    items: VecDeque<T>,
    closed: bool,
}

struct Shared<T> {
    state: Mutex<State<T>>,
    ready: Condvar,
}

impl<T> Shared<T> {
    // A panicking worker must not hide the remaining items from the others
    fn lock(&self) -> MutexGuard<'_, State<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn close(&self) {
        self.lock().closed = true;
        self.ready.notify_all();
    }
}

/// Producing end. Closing consumes it, so nothing can be pushed afterwards.
pub struct Sender<T> {
    shared: Arc<Shared<T>>,
}

/// Consuming end. Clone it to add consumers.
pub struct Receiver<T> {
    shared: Arc<Shared<T>>,
}

/// Create an open, empty queue
pub fn channel<T>() -> (Sender<T>, Receiver<T>) {
    with_capacity(0)
}

/// Create an open queue with room for `capacity` items before reallocating
pub fn with_capacity<T>(capacity: usize) -> (Sender<T>, Receiver<T>) {
    let shared = Arc::new(Shared {
        state: Mutex::new(State {
            items: VecDeque::with_capacity(capacity),
            closed: false,
        }),
        ready: Condvar::new(),
    });
    (
        Sender { shared: Arc::clone(&shared) },
        Receiver { shared },
    )
}

impl<T> Sender<T> {
    pub fn push(&self, item: T) {
        self.shared.lock().items.push_back(item);
        self.shared.ready.notify_one();
    }

    /// Mark the queue exhausted and wake every waiting receiver
    pub fn close(self) {
        drop(self);
    }
}

impl<T> Drop for Sender<T> {
    fn drop(&mut self) {
        self.shared.close();
    }
}

impl<T> Receiver<T> {
    /// Take the next item, blocking while the queue is open and empty.
    ///
    /// Returns `None` once the queue is closed and drained.
    pub fn pop(&self) -> Option<T> {
        let mut state = self.shared.lock();
        loop {
            if let Some(item) = state.items.pop_front() {
                return Some(item);
            }
            if state.closed {
                return None;
            }
            state = self
                .shared
                .ready
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    pub fn status(&self) -> QueueStatus {
        let state = self.shared.lock();
        match (state.closed, state.items.is_empty()) {
            (false, _) => QueueStatus::Open,
            (true, false) => QueueStatus::Closed,
            (true, true) => QueueStatus::Drained,
        }
    }

    /// Number of buffered items
    pub fn len(&self) -> usize {
        self.shared.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Clone for Receiver<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> Iterator for Receiver<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.pop()
    }
}
