use crate::{BroadcastMessage, StoreResult};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[async_trait]
pub trait BroadcastStore: Send + Sync {
    async fn insert_broadcast(&self, message: &BroadcastMessage) -> StoreResult<()>;

    /// Atomically move a `draft` or `scheduled` broadcast to `sending`.
    ///
    /// Returns `false` when the broadcast is missing or already past those
    /// states, so at most one caller ever dispatches it.
    async fn claim_for_sending(&self, id: Uuid) -> StoreResult<bool>;

    /// Overwrite status, stats and timestamps of an existing broadcast.
    async fn update_broadcast(&self, message: &BroadcastMessage) -> StoreResult<()>;

    async fn find_broadcast(&self, id: Uuid) -> StoreResult<Option<BroadcastMessage>>;

    /// Most recent broadcasts first.
    async fn list_broadcasts(&self, limit: u32) -> StoreResult<Vec<BroadcastMessage>>;

    /// Scheduled broadcasts whose `scheduled_for` is at or before `now`.
    async fn due_scheduled(&self, now: DateTime<Utc>) -> StoreResult<Vec<BroadcastMessage>>;
}
