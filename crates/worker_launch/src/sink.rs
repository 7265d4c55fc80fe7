//! src/sink.rs
//!
//! Output sinks for worker emissions.
//!
//! Workers receive their sink explicitly (`Arc<dyn Sink>`) instead of writing
//! to an implicit process-wide stream, so the caller decides where emissions
//! go and whether they are collected deterministically.
//!
//! - `StdoutSink`: the classic shared stream. Concurrent workers' digits
//!   interleave in whatever order the threads reach it.
//! - `ChannelSink`: funnels every emission to a single collector, for callers
//!   that want to observe the full multiset on one thread.

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::{Receiver, Sender};
use std::io::{self, Write};

/// Destination for worker emissions.
///
/// Implementations must be shareable across worker threads. `emit` is called
/// exactly once per worker, with that worker's own index.
///
/// Errors returned from `emit` are swallowed inside the worker — a worker has
/// no failure path — but the trait still surfaces them so implementations can
/// be reused in contexts where they matter.
pub trait Sink: Send + Sync {
    fn emit(&self, index: usize) -> Result<()>;
}

/// Sink that writes each index to stdout with no separator and no newline.
///
/// Every write is flushed immediately: workers are typically detached and may
/// outlive whoever would otherwise flush the buffered stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StdoutSink {
    fn emit(&self, index: usize) -> Result<()> {
        let mut out = io::stdout().lock();
        write!(out, "{}", index).context("Failed to write index to stdout")?;
        out.flush().context("Failed to flush stdout")?;
        Ok(())
    }
}

/// Sink that forwards each index over an unbounded channel.
///
/// The receiving half collects emissions on a single thread, which is the
/// way to get a deterministic view of output without serializing the workers
/// themselves.
pub struct ChannelSink {
    tx: Sender<usize>,
}

impl ChannelSink {
    /// Creates the sink and the receiving half used for collection.
    pub fn unbounded() -> (Self, Receiver<usize>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self { tx }, rx)
    }
}

impl Sink for ChannelSink {
    fn emit(&self, index: usize) -> Result<()> {
        self.tx
            .send(index)
            .map_err(|_| anyhow!("Collector receiver dropped before worker {} emitted", index))
    }
}
