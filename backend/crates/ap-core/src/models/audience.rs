use crate::RecipientId;

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AudienceType {
    All,
    Role,
    Activity,
    Custom,
}

impl AudienceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Role => "role",
            Self::Activity => "activity",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for AudienceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated audience description, ready for resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Audience {
    All,
    Role(String),
    /// Recipients that produced content within the lookback window.
    /// `None` means the resolver's configured default applies.
    Activity { days: Option<u32> },
    Custom(Vec<RecipientId>),
}

impl Audience {
    pub fn audience_type(&self) -> AudienceType {
        match self {
            Self::All => AudienceType::All,
            Self::Role(_) => AudienceType::Role,
            Self::Activity { .. } => AudienceType::Activity,
            Self::Custom(_) => AudienceType::Custom,
        }
    }
}
