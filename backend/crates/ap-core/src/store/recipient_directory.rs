use crate::{RecipientId, StoreResult};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Read access to the user and content collections for audience queries.
#[async_trait]
pub trait RecipientDirectory: Send + Sync {
    async fn all_recipient_ids(&self) -> StoreResult<Vec<RecipientId>>;

    async fn recipient_ids_with_role(&self, role: &str) -> StoreResult<Vec<RecipientId>>;

    /// Authors of content created at or after `since`. May contain duplicates,
    /// one entry per qualifying content record.
    async fn content_author_ids_since(&self, since: DateTime<Utc>)
    -> StoreResult<Vec<RecipientId>>;
}
