use crate::{NotificationRecord, StoreResult};

use async_trait::async_trait;

/// Largest number of writes the store accepts in one batch commit.
pub const MAX_WRITE_BATCH: usize = 500;

#[async_trait]
pub trait NotificationRecordStore: Send + Sync {
    /// Commit up to [`MAX_WRITE_BATCH`] records atomically. Records whose id
    /// already exists are overwritten.
    async fn commit_batch(&self, records: &[NotificationRecord]) -> StoreResult<()>;

    async fn records_for_broadcast(
        &self,
        broadcast_id: uuid::Uuid,
    ) -> StoreResult<Vec<NotificationRecord>>;
}
