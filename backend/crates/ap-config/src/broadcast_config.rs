use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_BATCH_SIZE: usize = 1;
pub const MAX_BATCH_SIZE: usize = 1000;
pub const DEFAULT_BATCH_SIZE: usize = 100;

pub const MAX_BATCH_DELAY_MS: u64 = 60_000;
pub const DEFAULT_BATCH_DELAY_MS: u64 = 1000;

/// The store rejects batch commits larger than this.
pub const MAX_RECORD_BATCH_SIZE: usize = 500;
pub const DEFAULT_RECORD_BATCH_SIZE: usize = 500;

pub const MIN_ACTIVITY_LOOKBACK_DAYS: u32 = 1;
pub const MAX_ACTIVITY_LOOKBACK_DAYS: u32 = 365;
pub const DEFAULT_ACTIVITY_LOOKBACK_DAYS: u32 = 30;

pub const MAX_SCHEDULER_INTERVAL_SECS: u64 = 86_400;
pub const DEFAULT_SCHEDULER_INTERVAL_SECS: u64 = 60;

/// Fan-out tuning for broadcast delivery.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BroadcastConfig {
    /// Recipients pushed concurrently per batch.
    pub batch_size: usize,
    /// Pause between push batches. Not applied after the last batch.
    pub batch_delay_ms: u64,
    /// Notification records committed per store batch.
    pub record_batch_size: usize,
    /// Lookback window for `activity` audiences without an explicit `days` filter.
    pub activity_lookback_days: u32,
    /// Poll interval of the scheduled-broadcast runner (0 = disabled).
    pub scheduler_interval_secs: u64,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            batch_delay_ms: DEFAULT_BATCH_DELAY_MS,
            record_batch_size: DEFAULT_RECORD_BATCH_SIZE,
            activity_lookback_days: DEFAULT_ACTIVITY_LOOKBACK_DAYS,
            scheduler_interval_secs: DEFAULT_SCHEDULER_INTERVAL_SECS,
        }
    }
}

impl BroadcastConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.batch_size < MIN_BATCH_SIZE || self.batch_size > MAX_BATCH_SIZE {
            return Err(ConfigError::broadcast(format!(
                "broadcast.batch_size must be {}-{}, got {}",
                MIN_BATCH_SIZE, MAX_BATCH_SIZE, self.batch_size
            )));
        }

        if self.batch_delay_ms > MAX_BATCH_DELAY_MS {
            return Err(ConfigError::broadcast(format!(
                "broadcast.batch_delay_ms must be 0-{}, got {}",
                MAX_BATCH_DELAY_MS, self.batch_delay_ms
            )));
        }

        if self.record_batch_size == 0 || self.record_batch_size > MAX_RECORD_BATCH_SIZE {
            return Err(ConfigError::broadcast(format!(
                "broadcast.record_batch_size must be 1-{}, got {}",
                MAX_RECORD_BATCH_SIZE, self.record_batch_size
            )));
        }

        if self.activity_lookback_days < MIN_ACTIVITY_LOOKBACK_DAYS
            || self.activity_lookback_days > MAX_ACTIVITY_LOOKBACK_DAYS
        {
            return Err(ConfigError::broadcast(format!(
                "broadcast.activity_lookback_days must be {}-{}, got {}",
                MIN_ACTIVITY_LOOKBACK_DAYS, MAX_ACTIVITY_LOOKBACK_DAYS, self.activity_lookback_days
            )));
        }

        if self.scheduler_interval_secs > MAX_SCHEDULER_INTERVAL_SECS {
            return Err(ConfigError::broadcast(format!(
                "broadcast.scheduler_interval_secs must be 0-{}, got {}",
                MAX_SCHEDULER_INTERVAL_SECS, self.scheduler_interval_secs
            )));
        }

        Ok(())
    }
}
