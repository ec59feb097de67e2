use ap_core::{BroadcastMessage, BroadcastStats, TargetAudienceSpec};

use serde::Serialize;

/// Broadcast DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastDto {
    pub id: String,
    pub title: String,
    pub body: String,
    pub category: String,
    pub target_audience: TargetAudienceSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep_link: Option<String>,
    pub status: String,
    pub stats: BroadcastStats,
    pub created_at: String,
    pub scheduled_for: Option<String>,
    pub sent_at: Option<String>,
}

impl From<BroadcastMessage> for BroadcastDto {
    fn from(m: BroadcastMessage) -> Self {
        Self {
            id: m.id.to_string(),
            title: m.title,
            body: m.body,
            category: m.category.to_string(),
            target_audience: m.target_audience,
            image_url: m.image_url,
            deep_link: m.deep_link,
            status: m.status.to_string(),
            stats: m.stats,
            created_at: m.created_at.to_rfc3339(),
            scheduled_for: m.scheduled_for.map(|at| at.to_rfc3339()),
            sent_at: m.sent_at.map(|at| at.to_rfc3339()),
        }
    }
}
