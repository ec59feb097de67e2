use crate::{BroadcastMetrics, RenderedNotification};

use ap_core::store::notification_record_store::MAX_WRITE_BATCH;
use ap_core::{NotificationRecord, NotificationRecordStore, RecipientId, SYSTEM_ACTOR, StoreResult};

use std::sync::Arc;

use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordWriteSummary {
    pub records: usize,
    pub batches: usize,
}

/// Writes one in-app notification per eligible recipient in bounded batches.
pub struct NotificationRecordWriter {
    store: Arc<dyn NotificationRecordStore>,
    batch_size: usize,
    metrics: BroadcastMetrics,
}

impl NotificationRecordWriter {
    /// `batch_size` is clamped to `1..=MAX_WRITE_BATCH`.
    pub fn new(store: Arc<dyn NotificationRecordStore>, batch_size: usize) -> Self {
        Self {
            store,
            batch_size: batch_size.clamp(1, MAX_WRITE_BATCH),
            metrics: BroadcastMetrics::new(),
        }
    }

    /// Record ids are derived from `(broadcast_id, recipient)`, so writing the
    /// same broadcast twice overwrites instead of duplicating.
    pub async fn write_records(
        &self,
        broadcast_id: Uuid,
        recipients: &[RecipientId],
        rendered: &RenderedNotification,
    ) -> StoreResult<RecordWriteSummary> {
        let mut summary = RecordWriteSummary::default();

        for chunk in recipients.chunks(self.batch_size) {
            let records: Vec<NotificationRecord> = chunk
                .iter()
                .map(|recipient_id| build_record(broadcast_id, recipient_id, rendered))
                .collect();

            self.store.commit_batch(&records).await?;

            summary.records += records.len();
            summary.batches += 1;
            self.metrics.records_written(records.len());
        }

        log::debug!(
            "Wrote {} notification records for broadcast {} in {} batches",
            summary.records,
            broadcast_id,
            summary.batches
        );

        Ok(summary)
    }
}

fn build_record(
    broadcast_id: Uuid,
    recipient_id: &str,
    rendered: &RenderedNotification,
) -> NotificationRecord {
    NotificationRecord {
        id: NotificationRecord::record_id(broadcast_id, recipient_id),
        broadcast_id,
        recipient_id: recipient_id.to_string(),
        category: rendered.category,
        message: rendered.text.clone(),
        is_read: false,
        actors: vec![SYSTEM_ACTOR.to_string()],
        deep_link: rendered.deep_link.clone(),
        image_url: rendered.image_url.clone(),
        created_at: None,
    }
}
