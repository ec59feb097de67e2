use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Lifecycle of a broadcast message.
///
/// `Draft | Scheduled -> Sending -> Sent | Failed`. A send that aborts before
/// any push went out drops back from `Sending` to `Draft` so it can be retried.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BroadcastStatus {
    #[default]
    Draft,
    Scheduled,
    Sending,
    Sent,
    Failed,
}

impl BroadcastStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Scheduled => "scheduled",
            Self::Sending => "sending",
            Self::Sent => "sent",
            Self::Failed => "failed",
        }
    }

    pub fn can_transition_to(&self, next: BroadcastStatus) -> bool {
        matches!(
            (self, next),
            (Self::Draft | Self::Scheduled, Self::Sending)
                | (Self::Sending, Self::Sent | Self::Failed | Self::Draft)
        )
    }

    /// Whether a broadcast in this status may be handed to the dispatcher.
    pub fn is_dispatchable(&self) -> bool {
        self.can_transition_to(Self::Sending)
    }
}

impl fmt::Display for BroadcastStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BroadcastStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "draft" => Ok(Self::Draft),
            "scheduled" => Ok(Self::Scheduled),
            "sending" => Ok(Self::Sending),
            "sent" => Ok(Self::Sent),
            "failed" => Ok(Self::Failed),
            _ => Err(CoreError::InvalidStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
