use ap_core::{StoreResult, TokenStore};

use std::sync::Arc;

/// Read access to a recipient's push tokens, plus removal of dead ones.
#[derive(Clone)]
pub struct DeliveryTokenRegistry {
    store: Arc<dyn TokenStore>,
}

impl DeliveryTokenRegistry {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Enabled tokens only.
    pub async fn get_tokens(&self, recipient_id: &str) -> StoreResult<Vec<String>> {
        let tokens = self.store.tokens_for(recipient_id).await?;
        Ok(tokens
            .into_iter()
            .filter(|t| t.enabled)
            .map(|t| t.token)
            .collect())
    }

    /// Delete a token the gateway reported as permanently invalid.
    pub async fn invalidate(&self, token: &str) -> StoreResult<bool> {
        let removed = self.store.delete_token(token).await?;
        if removed {
            log::info!("Invalidated dead delivery token {}", redact(token));
        }
        Ok(removed)
    }
}

/// Tokens are credentials; only a short prefix goes to the log.
pub(crate) fn redact(token: &str) -> String {
    let prefix: String = token.chars().take(8).collect();
    format!("{}…", prefix)
}
