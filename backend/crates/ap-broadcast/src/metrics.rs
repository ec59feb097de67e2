use ap_core::{AudienceType, SkipReason};

use std::time::Duration;

use metrics::{counter, histogram};

/// Metrics collector for broadcast delivery
#[derive(Clone)]
pub struct BroadcastMetrics {
    prefix: &'static str,
}

impl BroadcastMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "ap_broadcast",
        }
    }

    pub fn audience_resolved(&self, audience_type: AudienceType, recipients: usize) {
        counter!(format!("{}.audience.resolved.{}", self.prefix, audience_type)).increment(1);
        histogram!(format!("{}.audience.size", self.prefix)).record(recipients as f64);
    }

    pub fn recipient_skipped(&self, reason: &SkipReason) {
        counter!(format!("{}.recipients.skipped", self.prefix)).increment(1);
        counter!(format!("{}.recipients.skipped.{}", self.prefix, reason)).increment(1);
    }

    pub fn pushes(&self, sent: usize, failed: usize) {
        counter!(format!("{}.push.sent", self.prefix)).increment(sent as u64);
        counter!(format!("{}.push.failed", self.prefix)).increment(failed as u64);
    }

    pub fn recipient_error(&self) {
        counter!(format!("{}.recipients.errors", self.prefix)).increment(1);
    }

    pub fn token_invalidated(&self) {
        counter!(format!("{}.tokens.invalidated", self.prefix)).increment(1);
    }

    pub fn token_invalidation_failed(&self) {
        counter!(format!("{}.tokens.invalidation_failed", self.prefix)).increment(1);
    }

    pub fn batch_latency(&self, duration: Duration) {
        histogram!(format!("{}.batch.latency_ms", self.prefix)).record(duration.as_millis() as f64);
    }

    pub fn records_written(&self, count: usize) {
        counter!(format!("{}.records.written", self.prefix)).increment(count as u64);
    }

    /// Final status of a send attempt (`sent`, `draft`, `failed`).
    pub fn broadcast_finished(&self, status: &str) {
        counter!(format!("{}.broadcasts.{}", self.prefix, status)).increment(1);
    }
}

impl Default for BroadcastMetrics {
    fn default() -> Self {
        Self::new()
    }
}
