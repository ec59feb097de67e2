use crate::RecipientId;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Push handle for one installed client instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryToken {
    pub recipient_id: RecipientId,
    pub token: String,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl DeliveryToken {
    pub fn new(recipient_id: impl Into<RecipientId>, token: impl Into<String>) -> Self {
        Self {
            recipient_id: recipient_id.into(),
            token: token.into(),
            enabled: true,
            platform: None,
            created_at: None,
        }
    }
}
