use ap_broadcast::{BroadcastOutcome, SkippedRecipient};
use ap_core::BroadcastStats;

use serde::Serialize;

/// Result of creating or sending a broadcast.
///
/// Counts are reported even when some deliveries failed. A scheduled
/// broadcast reports zeros until it runs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastSendResponse {
    pub notification_id: String,
    pub status: String,
    pub stats: BroadcastStats,
    pub sent: usize,
    pub failed: usize,
    pub skipped: usize,
    pub skipped_reasons: Vec<SkippedRecipient>,
}

impl From<BroadcastOutcome> for BroadcastSendResponse {
    fn from(o: BroadcastOutcome) -> Self {
        Self {
            notification_id: o.message.id.to_string(),
            status: o.message.status.to_string(),
            stats: o.message.stats,
            sent: o.sent,
            failed: o.failed,
            skipped: o.skipped.len(),
            skipped_reasons: o.skipped,
        }
    }
}
