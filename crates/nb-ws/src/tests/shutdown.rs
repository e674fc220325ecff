use crate::ShutdownCoordinator;

use std::time::Duration;

use tokio::time::timeout;

#[tokio::test]
async fn test_wait_pends_until_shutdown_fires() {
    let coordinator = ShutdownCoordinator::new();
    let mut guard = coordinator.subscribe();

    let result = timeout(Duration::from_millis(50), guard.wait()).await;

    assert!(result.is_err(), "guard resolved without a shutdown signal");
}

#[tokio::test]
async fn test_shutdown_wakes_every_guard() {
    let coordinator = ShutdownCoordinator::new();
    let mut first = coordinator.subscribe();
    let mut second = coordinator.subscribe();

    coordinator.shutdown();

    timeout(Duration::from_millis(100), first.wait())
        .await
        .unwrap();
    timeout(Duration::from_millis(100), second.wait())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_clone_shares_the_same_channel() {
    let coordinator = ShutdownCoordinator::new();
    let clone = coordinator.clone();
    let mut guard = coordinator.subscribe();

    clone.shutdown();

    timeout(Duration::from_millis(100), guard.wait())
        .await
        .unwrap();
}
