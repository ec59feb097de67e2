use ap_core::{BroadcastCategory, BroadcastMessage, PushPayload};

use std::collections::BTreeMap;

/// Longest in-app notification text, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 500;

pub const DATA_TYPE: &str = "type";
pub const DATA_CATEGORY: &str = "category";
pub const DATA_NOTIFICATION_ID: &str = "notificationId";
pub const DATA_DEEP_LINK: &str = "deepLink";
pub const BROADCAST_TYPE: &str = "broadcast";

/// What every recipient of a broadcast sees, rendered once per send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNotification {
    pub category: BroadcastCategory,
    /// In-app text, `"<title>: <body>"`.
    pub text: String,
    pub deep_link: Option<String>,
    pub image_url: Option<String>,
    pub push: PushPayload,
}

impl RenderedNotification {
    pub fn from_message(message: &BroadcastMessage) -> Self {
        let text = truncate_chars(
            &format!("{}: {}", message.title, message.body),
            MAX_MESSAGE_LENGTH,
        );

        let mut data = BTreeMap::new();
        data.insert(DATA_TYPE.to_string(), BROADCAST_TYPE.to_string());
        data.insert(
            DATA_CATEGORY.to_string(),
            message.category.as_str().to_string(),
        );
        data.insert(DATA_NOTIFICATION_ID.to_string(), message.id.to_string());
        if let Some(link) = &message.deep_link {
            data.insert(DATA_DEEP_LINK.to_string(), link.clone());
        }

        Self {
            category: message.category,
            text,
            deep_link: message.deep_link.clone(),
            image_url: message.image_url.clone(),
            push: PushPayload {
                title: message.title.clone(),
                body: message.body.clone(),
                image_url: message.image_url.clone(),
                data,
            },
        }
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
