//! Shared utilities for worker threads.

pub(crate) mod thread;
