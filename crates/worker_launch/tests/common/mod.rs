use anyhow::{anyhow, Result};
use std::fmt::Write as _;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use worker_launch::{current_worker_id, Sink, WorkerSet, WorkerState};

/// Sink that appends each emitted index to a shared string, digit after digit.
pub struct BufferSink {
    buf: Mutex<String>,
}

impl BufferSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            buf: Mutex::new(String::new()),
        })
    }

    pub fn contents(&self) -> String {
        self.buf.lock().expect("buffer lock poisoned").clone()
    }
}

impl Sink for BufferSink {
    fn emit(&self, index: usize) -> Result<()> {
        let mut buf = self.buf.lock().map_err(|_| anyhow!("buffer lock poisoned"))?;
        write!(buf, "{}", index)?;
        Ok(())
    }
}

/// Sink that counts emissions without recording them.
pub struct CountingSink {
    pub count: Arc<AtomicUsize>,
}

impl Sink for CountingSink {
    fn emit(&self, _index: usize) -> Result<()> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Sink that records the thread-local worker id alongside each emission.
pub struct WorkerIdSink {
    pub seen: Mutex<Vec<(Option<usize>, usize)>>,
}

impl WorkerIdSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            seen: Mutex::new(Vec::new()),
        })
    }
}

impl Sink for WorkerIdSink {
    fn emit(&self, index: usize) -> Result<()> {
        let mut seen = self.seen.lock().map_err(|_| anyhow!("seen lock poisoned"))?;
        seen.push((current_worker_id(), index));
        Ok(())
    }
}

/// Sink whose writes always fail; workers must swallow the error.
pub struct FailingSink {
    pub attempts: Arc<AtomicUsize>,
}

impl Sink for FailingSink {
    fn emit(&self, index: usize) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(anyhow!("sink rejected index {}", index))
    }
}

/// Polls until every worker in the set reports `Done`, panicking on timeout.
pub fn wait_until_all_done(set: &WorkerSet, timeout: Duration) {
    let deadline = Instant::now() + timeout;
    while set.handles().iter().any(|h| h.state() != WorkerState::Done) {
        assert!(
            Instant::now() < deadline,
            "workers did not finish within {:?}",
            timeout
        );
        std::thread::sleep(Duration::from_millis(5));
    }
}
