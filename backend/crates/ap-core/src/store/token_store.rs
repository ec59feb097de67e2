use crate::{DeliveryToken, StoreResult};

use async_trait::async_trait;

#[async_trait]
pub trait TokenStore: Send + Sync {
    /// All tokens registered for a recipient, enabled or not.
    async fn tokens_for(&self, recipient_id: &str) -> StoreResult<Vec<DeliveryToken>>;

    async fn save_token(&self, token: &DeliveryToken) -> StoreResult<()>;

    /// Remove a token record. Returns whether a record existed.
    async fn delete_token(&self, token: &str) -> StoreResult<bool>;
}
