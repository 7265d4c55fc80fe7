//! Thread-local storage for worker identification.
//!
//! Provides a thread-local worker ID that allows workers to identify
//! themselves for debugging and for sink implementations that care which
//! worker is emitting.

use std::cell::Cell;

thread_local! {
    /// Thread-local worker ID.
    ///
    /// Set by the launcher (to the worker's index) before the worker body
    /// runs. `None` on any thread that is not a worker.
    pub(crate) static WORKER_ID: Cell<Option<usize>> = Cell::new(None);
}

/// Marks the current thread as the worker with the given index.
pub(crate) fn set_worker_id(index: usize) {
    WORKER_ID.with(|id| id.set(Some(index)));
}

/// Returns the index of the worker running on the current thread, or `None`
/// when called outside a worker body.
pub fn current_worker_id() -> Option<usize> {
    WORKER_ID.with(|id| id.get())
}
