use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BroadcastCategory {
    Announcement,
    Promo,
    FeatureUpdate,
    Event,
}

impl BroadcastCategory {
    pub const ALL: [BroadcastCategory; 4] = [
        Self::Announcement,
        Self::Promo,
        Self::FeatureUpdate,
        Self::Event,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Announcement => "announcement",
            Self::Promo => "promo",
            Self::FeatureUpdate => "feature_update",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for BroadcastCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BroadcastCategory {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "announcement" => Ok(Self::Announcement),
            "promo" => Ok(Self::Promo),
            "feature_update" => Ok(Self::FeatureUpdate),
            "event" => Ok(Self::Event),
            _ => Err(CoreError::InvalidCategory {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
