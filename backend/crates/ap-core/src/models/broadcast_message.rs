use crate::{
    BroadcastCategory, BroadcastStats, BroadcastStatus, CoreError, CoreResult, TargetAudienceSpec,
};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_BODY_LENGTH: usize = 2000;

/// An admin-authored push/in-app announcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastMessage {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub category: BroadcastCategory,
    pub target_audience: TargetAudienceSpec,
    pub image_url: Option<String>,
    pub deep_link: Option<String>,
    pub status: BroadcastStatus,
    pub stats: BroadcastStats,
    pub created_at: DateTime<Utc>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub sent_at: Option<DateTime<Utc>>,
}

impl BroadcastMessage {
    /// Create a draft, or a scheduled message when `scheduled_for` lies in the future.
    pub fn new(
        title: String,
        body: String,
        category: BroadcastCategory,
        target_audience: TargetAudienceSpec,
        image_url: Option<String>,
        deep_link: Option<String>,
        scheduled_for: Option<DateTime<Utc>>,
    ) -> Self {
        let now = Utc::now();
        let status = match scheduled_for {
            Some(at) if at > now => BroadcastStatus::Scheduled,
            _ => BroadcastStatus::Draft,
        };

        Self {
            id: Uuid::new_v4(),
            title,
            body,
            category,
            target_audience,
            image_url,
            deep_link,
            status,
            stats: BroadcastStats::default(),
            created_at: now,
            scheduled_for,
            sent_at: None,
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(CoreError::validation("title is required", Some("title")));
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(CoreError::validation(
                format!("title must be at most {} characters", MAX_TITLE_LENGTH),
                Some("title"),
            ));
        }

        let body = self.body.trim();
        if body.is_empty() {
            return Err(CoreError::validation("body is required", Some("body")));
        }
        if body.chars().count() > MAX_BODY_LENGTH {
            return Err(CoreError::validation(
                format!("body must be at most {} characters", MAX_BODY_LENGTH),
                Some("body"),
            ));
        }

        self.target_audience.audience()?;

        Ok(())
    }

    /// Move to `next`, rejecting transitions the lifecycle does not allow.
    #[track_caller]
    pub fn transition_to(&mut self, next: BroadcastStatus) -> CoreResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(CoreError::InvalidStatusTransition {
                from: self.status.to_string(),
                to: next.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.status = next;
        if next == BroadcastStatus::Sent {
            self.sent_at = Some(Utc::now());
        }
        Ok(())
    }

    /// Scheduled messages whose time has come.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.status == BroadcastStatus::Scheduled
            && self.scheduled_for.is_none_or(|at| at <= now)
    }
}
