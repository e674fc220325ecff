//! Periodic usage sampler shared by all WebSocket clients.
//!
//! A single background task reads the summed request counter off the
//! database and fans it out over a broadcast channel. The task starts
//! lazily with the first connection and stops when the shutdown
//! coordinator fires.

use crate::{ShutdownCoordinator, StatsUpdate};

use nb_db::UserRepository;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use log::{info, warn};
use sqlx::SqlitePool;
use tokio::sync::{Mutex, broadcast};

#[derive(Clone)]
pub struct StatsBroadcaster {
    tx: broadcast::Sender<StatsUpdate>,
    started: Arc<Mutex<bool>>,
    interval: Duration,
}

impl StatsBroadcaster {
    pub fn new(interval: Duration, channel_capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(channel_capacity);

        Self {
            tx,
            started: Arc::new(Mutex::new(false)),
            interval,
        }
    }

    /// Subscribe to usage updates.
    pub fn subscribe(&self) -> broadcast::Receiver<StatsUpdate> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Start the sampling task unless it is already running. Returns true
    /// when this call actually started it.
    pub async fn ensure_started(&self, pool: SqlitePool, shutdown: &ShutdownCoordinator) -> bool {
        let mut started = self.started.lock().await;
        if *started {
            return false;
        }
        *started = true;

        let tx = self.tx.clone();
        let interval = self.interval;
        let mut guard = shutdown.subscribe();

        tokio::spawn(async move {
            let users = UserRepository::new(pool);

            loop {
                tokio::select! {
                    _ = tokio::time::sleep(interval) => {
                        match users.sum_total_requests().await {
                            Ok(total) => {
                                // No subscribers is fine; the next tick retries.
                                let _ = tx.send(StatsUpdate::new(total, Utc::now()));
                            }
                            Err(e) => warn!("Stats sample failed: {e}"),
                        }
                    }
                    _ = guard.wait() => {
                        info!("Stats broadcaster stopped");
                        break;
                    }
                }
            }
        });

        info!("Stats broadcaster started, sampling every {interval:?}");

        true
    }
}
