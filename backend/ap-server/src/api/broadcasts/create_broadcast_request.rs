use crate::{ApiError, ApiResult};

use ap_broadcast::NewBroadcast;
use ap_core::{BroadcastCategory, TargetAudienceSpec};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBroadcastRequest {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub body: String,

    /// announcement | promo | feature_update | event
    #[serde(default)]
    pub category: String,

    /// `{type, filters}`; checked against the audience type on conversion
    #[serde(default)]
    pub target_audience: Value,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub deep_link: Option<String>,

    /// Future timestamps store the broadcast as scheduled instead of sending it
    #[serde(default)]
    pub scheduled_for: Option<DateTime<Utc>>,
}

impl CreateBroadcastRequest {
    /// Parse the loosely typed fields. Title, body and audience filters are
    /// validated by the broadcast service.
    #[track_caller]
    pub fn into_new_broadcast(self) -> ApiResult<NewBroadcast> {
        let category = BroadcastCategory::from_str(self.category.trim())
            .map_err(ap_broadcast::BroadcastError::from)?;

        if self.target_audience.is_null() {
            return Err(ApiError::Validation {
                message: "targetAudience is required".to_string(),
                field: Some("targetAudience".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        let target_audience: TargetAudienceSpec = serde_json::from_value(self.target_audience)
            .map_err(|e| ApiError::Validation {
                message: format!("Invalid targetAudience: {}", e),
                field: Some("targetAudience".to_string()),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(NewBroadcast {
            title: self.title,
            body: self.body,
            category,
            target_audience,
            image_url: non_blank(self.image_url),
            deep_link: non_blank(self.deep_link),
            scheduled_for: self.scheduled_for,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
