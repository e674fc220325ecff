use crate::ShutdownGuard;

use log::info;
use tokio::sync::broadcast;

/// Broadcasts a single shutdown signal to every long-lived task.
///
/// Cloning is cheap; all clones share the same channel, so a `shutdown()`
/// on any of them wakes every guard handed out so far.
#[derive(Clone)]
pub struct ShutdownCoordinator {
    shutdown_tx: broadcast::Sender<()>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);

        Self { shutdown_tx }
    }

    /// Get a guard that resolves once shutdown begins.
    pub fn subscribe(&self) -> ShutdownGuard {
        ShutdownGuard::new(self.shutdown_tx.subscribe())
    }

    /// Signal all subscribed tasks to wind down.
    pub fn shutdown(&self) {
        info!("Shutdown signal received, notifying all subsystems");
        let _ = self.shutdown_tx.send(());
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
