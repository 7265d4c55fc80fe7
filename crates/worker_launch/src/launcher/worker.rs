//! src/launcher/worker.rs
//!
//! Worker body: pause, swallow any interruption, emit, retire.
//!
//! Each worker moves through `Pending → Sleeping → Emitting → Done`
//! (`Sleeping` and `Emitting` are the two phases of a running worker).
//! There is no error state: an interrupted pause counts as a completed one,
//! and a failed emission is discarded. Nothing a worker does is ever
//! surfaced as a failure.

use crossbeam_channel::{Receiver, RecvTimeoutError};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::sink::Sink;

/// One-shot signal asking a sleeping worker to end its pause early.
#[derive(Debug)]
pub(crate) struct Interrupt;

/// Observable lifecycle of a single worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WorkerState {
    /// Built but not yet started.
    Pending = 0,
    /// Running, inside its pause.
    Sleeping = 1,
    /// Running, writing its index to the sink.
    Emitting = 2,
    /// Body finished; the thread is retiring.
    Done = 3,
}

impl WorkerState {
    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => WorkerState::Pending,
            1 => WorkerState::Sleeping,
            2 => WorkerState::Emitting,
            _ => WorkerState::Done,
        }
    }
}

/// Shared cell through which a `WorkerHandle` observes its worker's state.
#[derive(Debug)]
pub(crate) struct StateCell(AtomicU8);

impl StateCell {
    pub(crate) fn new() -> Self {
        Self(AtomicU8::new(WorkerState::Pending as u8))
    }

    pub(crate) fn store(&self, state: WorkerState) {
        self.0.store(state as u8, Ordering::Release);
    }

    pub(crate) fn load(&self) -> WorkerState {
        WorkerState::from_u8(self.0.load(Ordering::Acquire))
    }
}

/// How a worker's pause ended.
///
/// The worker treats both variants identically — an interrupted pause is
/// deliberately counted as a completed one — but the outcome is explicit so
/// that the swallowing happens in exactly one place, in `Worker::run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseOutcome {
    /// The full delay elapsed.
    Completed,
    /// An interruption signal arrived before the delay elapsed.
    Interrupted,
}

/// A cancellable blocking wait.
///
/// Blocks for `delay`, waking early only if an `Interrupt` arrives on
/// `interrupts`. A disconnected channel means every handle was dropped and no
/// interruption can ever arrive, so the worker sleeps out the remainder:
/// detaching a worker set must not shorten its workers' pauses.
pub(crate) fn pause(delay: Duration, interrupts: &Receiver<Interrupt>) -> PauseOutcome {
    let deadline = Instant::now() + delay;
    match interrupts.recv_deadline(deadline) {
        Ok(Interrupt) => PauseOutcome::Interrupted,
        Err(RecvTimeoutError::Timeout) => PauseOutcome::Completed,
        Err(RecvTimeoutError::Disconnected) => {
            let now = Instant::now();
            if now < deadline {
                thread::sleep(deadline - now);
            }
            PauseOutcome::Completed
        }
    }
}

/// A single unit of concurrent execution.
///
/// Captures its index by value at construction time; owns no shared mutable
/// state beyond the sink it emits into.
pub(crate) struct Worker {
    pub(crate) index: usize,
    pub(crate) pause: Duration,
    pub(crate) sink: Arc<dyn Sink>,
    pub(crate) interrupts: Receiver<Interrupt>,
    pub(crate) state: Arc<StateCell>,
}

impl Worker {
    /// Runs the worker body to completion. Never returns an error.
    pub(crate) fn run(self) {
        self.state.store(WorkerState::Sleeping);

        // Interrupted or not, the worker proceeds to emit.
        let _outcome = pause(self.pause, &self.interrupts);

        self.state.store(WorkerState::Emitting);

        // Emission failures have nowhere to go; the worker retires regardless.
        let _ = self.sink.emit(self.index);

        self.state.store(WorkerState::Done);
    }
}
