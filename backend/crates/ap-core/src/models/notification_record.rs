use crate::{BroadcastCategory, RecipientId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Durable in-app copy of a broadcast for a single recipient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    pub id: String,
    pub broadcast_id: Uuid,
    pub recipient_id: RecipientId,
    pub category: BroadcastCategory,
    pub message: String,
    pub is_read: bool,
    pub actors: Vec<String>,
    pub deep_link: Option<String>,
    pub image_url: Option<String>,
    /// Assigned by the store on first write.
    pub created_at: Option<DateTime<Utc>>,
}

impl NotificationRecord {
    /// Document key for a (broadcast, recipient) pair; rewriting the same pair
    /// overwrites the existing record.
    pub fn record_id(broadcast_id: Uuid, recipient_id: &str) -> String {
        format!("broadcast_{}_{}", broadcast_id.simple(), recipient_id)
    }
}
