use tokio::sync::broadcast;

/// Per-task handle on the shutdown channel.
pub struct ShutdownGuard {
    shutdown_rx: broadcast::Receiver<()>,
}

impl ShutdownGuard {
    pub(crate) fn new(shutdown_rx: broadcast::Receiver<()>) -> Self {
        Self { shutdown_rx }
    }

    /// Wait for the shutdown signal. A closed channel counts as shutdown,
    /// so this never pends forever once the coordinator is gone.
    pub async fn wait(&mut self) {
        let _ = self.shutdown_rx.recv().await;
    }
}
