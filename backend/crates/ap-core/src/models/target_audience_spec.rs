use crate::{Audience, AudienceType, CoreError, CoreResult, RecipientId};

use serde::{Deserialize, Serialize};

pub const MAX_ACTIVITY_DAYS: u32 = 365;

/// Declarative audience attached to a broadcast, as submitted by the admin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetAudienceSpec {
    #[serde(rename = "type")]
    pub audience_type: AudienceType,
    #[serde(default)]
    pub filters: AudienceFilters,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AudienceFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<RecipientId>>,
}

impl TargetAudienceSpec {
    pub fn all() -> Self {
        Self {
            audience_type: AudienceType::All,
            filters: AudienceFilters::default(),
        }
    }

    pub fn role(role: &str) -> Self {
        Self {
            audience_type: AudienceType::Role,
            filters: AudienceFilters {
                role: Some(role.to_string()),
                ..AudienceFilters::default()
            },
        }
    }

    pub fn activity(days: Option<u32>) -> Self {
        Self {
            audience_type: AudienceType::Activity,
            filters: AudienceFilters {
                days,
                ..AudienceFilters::default()
            },
        }
    }

    pub fn custom(user_ids: Vec<RecipientId>) -> Self {
        Self {
            audience_type: AudienceType::Custom,
            filters: AudienceFilters {
                user_ids: Some(user_ids),
                ..AudienceFilters::default()
            },
        }
    }

    /// Check the filters against the audience type and produce a resolvable audience.
    #[track_caller]
    pub fn audience(&self) -> CoreResult<Audience> {
        match self.audience_type {
            AudienceType::All => Ok(Audience::All),
            AudienceType::Role => match self.filters.role.as_deref().map(str::trim) {
                Some(role) if !role.is_empty() => Ok(Audience::Role(role.to_string())),
                _ => Err(CoreError::invalid_audience(
                    "role audience requires a non-empty filters.role",
                )),
            },
            AudienceType::Activity => match self.filters.days {
                Some(days) if days == 0 || days > MAX_ACTIVITY_DAYS => {
                    Err(CoreError::invalid_audience(format!(
                        "filters.days must be 1-{}, got {}",
                        MAX_ACTIVITY_DAYS, days
                    )))
                }
                days => Ok(Audience::Activity { days }),
            },
            AudienceType::Custom => match &self.filters.user_ids {
                Some(ids) => Ok(Audience::Custom(ids.clone())),
                None => Err(CoreError::invalid_audience(
                    "custom audience requires filters.userIds",
                )),
            },
        }
    }
}
