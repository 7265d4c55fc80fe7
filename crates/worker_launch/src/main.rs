use std::sync::Arc;

use worker_launch::{Launcher, LauncherConfig, StdoutSink};

fn main() -> anyhow::Result<()> {
    // Five workers, 500 ms pause each, digits to stdout.
    let launcher = Launcher::new(LauncherConfig::default());

    // Fire-and-forget: the returned set is dropped without joining, so the
    // process may exit before every worker has printed.
    launcher.launch(Arc::new(StdoutSink::new()))?;

    Ok(())
}
