//! src/launcher/mod.rs
//!
//! This module implements the `Launcher`.
//!
//! The `Launcher` builds a fixed-size set of independent workers, starts them
//! concurrently, and lets each run to completion with no coordination between
//! them. Each worker pauses for a configured duration, swallows any
//! interruption of that pause, and emits its own index to a shared `Sink`.
//!
//! # Architecture Overview
//!
//! ```text
//!                ┌────────────────┐
//!                │ LauncherConfig │ (num_workers, pause)
//!                └───────┬────────┘
//!                        │
//!                        ↓
//!                 ┌────────────┐
//!                 │  Launcher  │ builds all workers, then starts them
//!                 └─────┬──────┘   in index order
//!                       │
//!          ┌────────────┼────────────┐
//!          ↓            ↓            ↓
//!     [worker-0]   [worker-1]  … [worker-N-1]   (one thread each)
//!          │            │            │
//!          │   pause → (interrupt swallowed) → emit(index)
//!          ↓            ↓            ↓
//!                 ┌────────────┐
//!                 │    Sink    │ (stdout, channel, …) — emission order
//!                 └────────────┘   across workers is unspecified
//! ```
//!
//! # Module Structure
//!
//! ```text
//! src/launcher/
//! ├── mod.rs         # Public API exports + module-level architecture docs
//! ├── config.rs      # LauncherConfig and builder
//! ├── launch.rs      # Launcher, WorkerSet, WorkerHandle
//! ├── worker.rs      # Worker body, state machine, interruptible pause
//! └── common/
//!     ├── mod.rs     # Module declarations for shared utilities
//!     └── thread.rs  # Thread-local worker ID
//! ```
//!
//! # Example Usage
//!
//! ## Fire-and-forget (the default):
//! ```ignore
//! let launcher = Launcher::new(LauncherConfig::default());
//! launcher.launch(Arc::new(StdoutSink::new()))?;
//! // The set was dropped: workers are detached and the process may exit
//! // before every digit lands on stdout.
//! ```
//!
//! ## Collecting emissions:
//! ```ignore
//! let (sink, rx) = ChannelSink::unbounded();
//! let set = launcher.launch(Arc::new(sink))?;
//! set.join()?;
//! let mut seen: Vec<usize> = rx.try_iter().collect();
//! seen.sort_unstable(); // emission order is unspecified
//! ```

// Module declarations
mod common;
mod config;
mod launch;
mod worker;

// Public re-exports
pub use common::thread::current_worker_id;
pub use config::{LauncherConfig, LauncherConfigBuilder};
pub use launch::{Launcher, WorkerHandle, WorkerSet};
pub use worker::WorkerState;
