use crate::BroadcastService;

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::broadcast;
use tokio::time::MissedTickBehavior;

/// Periodically sends scheduled broadcasts whose time has come.
pub struct ScheduledBroadcastRunner {
    service: Arc<BroadcastService>,
    interval: Duration,
}

impl ScheduledBroadcastRunner {
    pub fn new(service: Arc<BroadcastService>, interval: Duration) -> Self {
        Self { service, interval }
    }

    /// Send everything due at `now`. Returns how many were sent; a failing
    /// broadcast is logged and does not stop the others.
    pub async fn run_once(&self, now: DateTime<Utc>) -> usize {
        let due = match self.service.due_scheduled(now).await {
            Ok(due) => due,
            Err(e) => {
                log::warn!("Failed to load scheduled broadcasts: {}", e);
                return 0;
            }
        };

        let mut sent = 0;
        for message in due {
            let id = message.id;
            match self.service.send_message(message).await {
                Ok(_) => sent += 1,
                Err(e) => log::warn!("Scheduled broadcast {} failed: {}", id, e),
            }
        }
        sent
    }

    /// Poll until a shutdown signal arrives.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        log::info!(
            "Scheduled broadcast runner started (every {}s)",
            self.interval.as_secs()
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let sent = self.run_once(Utc::now()).await;
                    if sent > 0 {
                        log::info!("Sent {} scheduled broadcasts", sent);
                    }
                }
                _ = shutdown.recv() => {
                    log::info!("Scheduled broadcast runner stopping");
                    break;
                }
            }
        }
    }
}
