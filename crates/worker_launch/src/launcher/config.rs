//! src/launcher/config.rs
//!
//! Configuration for Launcher behaviour.
//!
//! Example:
//! ```ignore
//! let config = LauncherConfig::builder()
//!     .num_workers(5)
//!     .pause(Duration::from_millis(500))
//!     .build();
//! ```

use std::time::Duration;

/// Default number of workers per launch.
pub(crate) const DEFAULT_NUM_WORKERS: usize = 5;

/// Default pause before each worker emits (milliseconds).
pub(crate) const DEFAULT_PAUSE_MS: u64 = 500;

/// Configuration for a `Launcher`.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Number of workers to build and start (0 = launch nothing).
    pub num_workers: usize,
    /// How long each worker pauses before emitting its index.
    ///
    /// `Duration::ZERO` is valid: the pause completes immediately.
    pub pause: Duration,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            num_workers: DEFAULT_NUM_WORKERS,
            pause: Duration::from_millis(DEFAULT_PAUSE_MS),
        }
    }
}

impl LauncherConfig {
    pub fn builder() -> LauncherConfigBuilder {
        LauncherConfigBuilder::default()
    }
}

/// Builder for LauncherConfig with method chaining.
#[derive(Default)]
pub struct LauncherConfigBuilder {
    config: LauncherConfig,
}

impl LauncherConfigBuilder {
    /// Set the number of workers. Zero is allowed and launches nothing.
    pub fn num_workers(mut self, workers: usize) -> Self {
        self.config.num_workers = workers;
        self
    }

    /// Set the pause duration applied at the start of every worker body.
    pub fn pause(mut self, pause: Duration) -> Self {
        self.config.pause = pause;
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> LauncherConfig {
        self.config
    }
}
