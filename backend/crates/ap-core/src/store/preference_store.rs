use crate::{RecipientId, RecipientPreference, StoreResult};

use std::collections::HashMap;

use async_trait::async_trait;

#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Stored preferences for the given recipients. Recipients without a
    /// record are absent from the map.
    async fn preferences_for(
        &self,
        recipient_ids: &[RecipientId],
    ) -> StoreResult<HashMap<RecipientId, RecipientPreference>>;

    async fn save_preference(&self, preference: &RecipientPreference) -> StoreResult<()>;
}
