use crate::{AppSettings, StoreResult};

use async_trait::async_trait;

#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn load_settings(&self) -> StoreResult<Option<AppSettings>>;

    /// Persist the document, returning it with the store-assigned `updated_at`.
    async fn save_settings(&self, settings: &AppSettings) -> StoreResult<AppSettings>;
}
