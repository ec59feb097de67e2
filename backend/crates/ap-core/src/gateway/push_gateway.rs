use crate::{MulticastResponse, PushGatewayError, PushPayload};

use async_trait::async_trait;

#[async_trait]
pub trait PushGateway: Send + Sync {
    /// Deliver `payload` to every token of one recipient in a single call.
    async fn send_multicast(
        &self,
        payload: &PushPayload,
        tokens: &[String],
    ) -> Result<MulticastResponse, PushGatewayError>;
}
