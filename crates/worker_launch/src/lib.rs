pub mod launcher;
pub mod sink;

pub use launcher::{
    current_worker_id, Launcher, LauncherConfig, LauncherConfigBuilder, WorkerHandle, WorkerSet,
    WorkerState,
};
pub use sink::{ChannelSink, Sink, StdoutSink};
