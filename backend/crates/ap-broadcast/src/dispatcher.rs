use crate::token_registry::redact;
use crate::{BroadcastMetrics, DeliveryTokenRegistry};

use ap_config::BroadcastConfig;
use ap_core::{PushGateway, PushPayload, RecipientId};

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::join_all;
use tokio::task::JoinSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Recipients sent concurrently per batch.
    pub batch_size: usize,
    /// Pause between batches. Never applied after the last one.
    pub batch_delay: Duration,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 100,
            batch_delay: Duration::from_secs(1),
        }
    }
}

impl From<&BroadcastConfig> for DispatchConfig {
    fn from(config: &BroadcastConfig) -> Self {
        Self {
            batch_size: config.batch_size,
            batch_delay: Duration::from_millis(config.batch_delay_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchResult {
    /// Tokens the gateway accepted.
    pub sent: usize,
    /// Tokens the gateway rejected, plus tokens of recipients whose send errored.
    pub failed: usize,
    pub batches: usize,
}

#[derive(Debug, Default)]
struct RecipientOutcome {
    sent: usize,
    failed: usize,
    dead_tokens: Vec<String>,
}

/// Fans a push payload out to recipients in sequential, bounded batches.
pub struct BroadcastDispatcher {
    tokens: DeliveryTokenRegistry,
    gateway: Arc<dyn PushGateway>,
    config: DispatchConfig,
    metrics: BroadcastMetrics,
}

impl BroadcastDispatcher {
    pub fn new(
        tokens: DeliveryTokenRegistry,
        gateway: Arc<dyn PushGateway>,
        config: DispatchConfig,
    ) -> Self {
        Self {
            tokens,
            gateway,
            config: DispatchConfig {
                batch_size: config.batch_size.max(1),
                ..config
            },
            metrics: BroadcastMetrics::new(),
        }
    }

    /// Deliver `payload` to every recipient.
    ///
    /// Recipients within a batch are sent concurrently; batches run one after
    /// another. A failing recipient is counted and logged but never stops the
    /// run, so this always returns totals. Dead tokens are removed in the
    /// background while later batches proceed.
    pub async fn dispatch(
        &self,
        payload: &PushPayload,
        recipients: &[RecipientId],
    ) -> DispatchResult {
        let mut result = DispatchResult::default();
        let mut invalidations = JoinSet::new();
        let batch_count = recipients.len().div_ceil(self.config.batch_size);

        for (index, batch) in recipients.chunks(self.config.batch_size).enumerate() {
            let started = Instant::now();

            let outcomes = join_all(
                batch
                    .iter()
                    .map(|recipient| self.send_to_recipient(payload, recipient)),
            )
            .await;

            let mut sent = 0;
            let mut failed = 0;
            for outcome in outcomes {
                sent += outcome.sent;
                failed += outcome.failed;
                for token in outcome.dead_tokens {
                    self.spawn_invalidation(&mut invalidations, token);
                }
            }

            result.sent += sent;
            result.failed += failed;
            result.batches += 1;

            self.metrics.pushes(sent, failed);
            self.metrics.batch_latency(started.elapsed());
            log::debug!(
                "Push batch {}/{}: {} recipients, {} sent, {} failed",
                index + 1,
                batch_count,
                batch.len(),
                sent,
                failed
            );

            if index + 1 < batch_count && !self.config.batch_delay.is_zero() {
                tokio::time::sleep(self.config.batch_delay).await;
            }
        }

        while let Some(joined) = invalidations.join_next().await {
            if let Err(e) = joined {
                log::warn!("Token invalidation task failed: {}", e);
            }
        }

        result
    }

    async fn send_to_recipient(
        &self,
        payload: &PushPayload,
        recipient_id: &str,
    ) -> RecipientOutcome {
        let tokens = match self.tokens.get_tokens(recipient_id).await {
            Ok(tokens) => tokens,
            Err(e) => {
                log::warn!("Token lookup failed for recipient {}: {}", recipient_id, e);
                self.metrics.recipient_error();
                return RecipientOutcome::default();
            }
        };

        if tokens.is_empty() {
            return RecipientOutcome::default();
        }

        match self.gateway.send_multicast(payload, &tokens).await {
            Ok(response) => RecipientOutcome {
                sent: response.success_count(),
                failed: response.failure_count(),
                dead_tokens: response.dead_tokens().map(String::from).collect(),
            },
            Err(e) => {
                log::warn!("Push to recipient {} failed: {}", recipient_id, e);
                self.metrics.recipient_error();
                RecipientOutcome {
                    sent: 0,
                    failed: tokens.len(),
                    dead_tokens: Vec::new(),
                }
            }
        }
    }

    fn spawn_invalidation(&self, tasks: &mut JoinSet<()>, token: String) {
        let registry = self.tokens.clone();
        let metrics = self.metrics.clone();

        tasks.spawn(async move {
            match registry.invalidate(&token).await {
                Ok(_) => metrics.token_invalidated(),
                Err(e) => {
                    metrics.token_invalidation_failed();
                    log::warn!("Failed to invalidate token {}: {}", redact(&token), e);
                }
            }
        });
    }
}
