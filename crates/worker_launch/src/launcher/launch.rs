//! src/launcher/launch.rs
//!
//! Launcher and worker-set handles.
//!
//! # Launch protocol
//!
//! Launch is two-phase: the complete worker set is built first (each worker
//! capturing its own index by value), then workers are started in index
//! order. Start order says nothing about completion order — workers share no
//! ordering primitive, and the relative order of their emissions is
//! unspecified.
//!
//! # Fire-and-forget
//!
//! Dropping a `WorkerSet` detaches its workers: nothing waits for them, and
//! the process may exit while they are still pausing or emitting. Callers
//! that need to observe completion opt in with `WorkerSet::join`.

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::{bounded, Sender};
use std::sync::Arc;
use std::thread;

use super::common::thread::set_worker_id;
use super::config::LauncherConfig;
use super::worker::{Interrupt, StateCell, Worker, WorkerState};
use crate::sink::Sink;

/// Builds and starts fixed-size sets of independent workers.
///
/// A `Launcher` holds only configuration and can launch any number of sets;
/// each launch is independent of the others.
pub struct Launcher {
    config: LauncherConfig,
}

impl Launcher {
    /// Creates a launcher with the given configuration.
    pub fn new(config: LauncherConfig) -> Self {
        Self { config }
    }

    /// Builds `num_workers` workers against `sink` and starts them.
    ///
    /// Every worker is constructed before any is started, so each one has
    /// already captured its own index when the start loop begins. Workers
    /// are started in index order on named threads (`worker-{index}`).
    ///
    /// The only error is a thread spawn failure; workers themselves have no
    /// failure path. With `num_workers = 0` this returns an empty set and
    /// emits nothing.
    pub fn launch(&self, sink: Arc<dyn Sink>) -> Result<WorkerSet> {
        let num_workers = self.config.num_workers;

        // Phase 1: build the full worker set.
        let mut workers = Vec::with_capacity(num_workers);
        let mut handles = Vec::with_capacity(num_workers);
        for index in 0..num_workers {
            let (interrupt_tx, interrupt_rx) = bounded(1);
            let state = Arc::new(StateCell::new());

            workers.push(Worker {
                index,
                pause: self.config.pause,
                sink: sink.clone(),
                interrupts: interrupt_rx,
                state: state.clone(),
            });
            handles.push(WorkerHandle {
                index,
                state,
                interrupts: interrupt_tx,
                thread: None,
            });
        }

        // Phase 2: start every worker, in index order.
        for (worker, handle) in workers.into_iter().zip(handles.iter_mut()) {
            let index = worker.index;
            let thread = thread::Builder::new()
                .name(format!("worker-{}", index))
                .spawn(move || {
                    set_worker_id(index);
                    worker.run();
                })
                .with_context(|| format!("Failed to spawn worker thread {}", index))?;
            handle.thread = Some(thread);
        }

        Ok(WorkerSet { handles })
    }
}

/// Handle to one started worker.
pub struct WorkerHandle {
    index: usize,
    state: Arc<StateCell>,
    interrupts: Sender<Interrupt>,
    thread: Option<thread::JoinHandle<()>>,
}

impl WorkerHandle {
    /// The index this worker captured at construction time.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current position in the worker's lifecycle.
    pub fn state(&self) -> WorkerState {
        self.state.load()
    }

    /// Asks the worker to end its pause early.
    ///
    /// The worker swallows the signal and emits exactly as if the pause had
    /// completed — interruption never suppresses output and never surfaces
    /// an error. At most one signal is deliverable while the worker sleeps.
    ///
    /// Returns whether the signal was delivered: `false` once the worker has
    /// retired or when a previous signal is still pending.
    pub fn interrupt(&self) -> bool {
        self.interrupts.try_send(Interrupt).is_ok()
    }
}

/// An ordered set of started workers.
///
/// The set exists to observe and (optionally) wait on workers; the workers
/// themselves never look back at it. Dropping the set detaches them.
pub struct WorkerSet {
    handles: Vec<WorkerHandle>,
}

impl WorkerSet {
    /// Number of workers started.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Handles in index order: `handles()[i].index() == i`.
    pub fn handles(&self) -> &[WorkerHandle] {
        &self.handles
    }

    /// Interrupts every worker that is still sleeping.
    pub fn interrupt_all(&self) {
        for handle in &self.handles {
            handle.interrupt();
        }
    }

    /// Waits for every worker to finish.
    ///
    /// Fire-and-forget is the default (dropping the set detaches the
    /// workers); joining is the explicit opt-in for callers that must not
    /// lose emissions — tests, mostly. Fails only if a worker thread
    /// panicked, which the worker body itself never does.
    pub fn join(mut self) -> Result<()> {
        for handle in &mut self.handles {
            if let Some(thread) = handle.thread.take() {
                thread
                    .join()
                    .map_err(|_| anyhow!("Worker thread {} panicked", handle.index))?;
            }
        }
        Ok(())
    }
}
