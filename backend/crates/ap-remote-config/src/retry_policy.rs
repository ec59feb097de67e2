use ap_config::RemoteSyncConfig;

use std::time::Duration;

/// Bounded attempts with linear backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    pub step: Duration,
}

impl RetryPolicy {
    pub const fn new(max_attempts: u32, step: Duration) -> Self {
        Self { max_attempts, step }
    }

    /// Wait after the `attempt`-th failure (1-based): `attempt * step`.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.step.saturating_mul(attempt)
    }

    /// Whether another attempt is allowed after `failed_attempts` failures.
    pub fn allows_retry(&self, failed_attempts: u32) -> bool {
        failed_attempts < self.max_attempts
    }
}

/// Retry budgets for the two retryable failure classes of a sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncRetryPolicy {
    /// Lost optimistic-concurrency races; each retry re-fetches the template.
    pub conflict: RetryPolicy,
    /// Server-side failures (5xx, 429) and transport errors.
    pub transient: RetryPolicy,
}

impl SyncRetryPolicy {
    /// Ceiling on attempts of one sync when conflicts and server failures
    /// interleave; each class still stops at its own budget.
    pub fn total_attempts(&self) -> u32 {
        self.conflict.max_attempts.max(self.transient.max_attempts)
    }
}

impl Default for SyncRetryPolicy {
    fn default() -> Self {
        Self {
            conflict: RetryPolicy::new(3, Duration::from_secs(1)),
            transient: RetryPolicy::new(2, Duration::from_secs(2)),
        }
    }
}

impl From<&RemoteSyncConfig> for SyncRetryPolicy {
    fn from(config: &RemoteSyncConfig) -> Self {
        Self {
            conflict: RetryPolicy::new(
                config.conflict_max_attempts,
                Duration::from_millis(config.conflict_backoff_ms),
            ),
            transient: RetryPolicy::new(
                config.server_max_attempts,
                Duration::from_millis(config.server_backoff_ms),
            ),
        }
    }
}
