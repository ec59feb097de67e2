use crate::BroadcastCategory;

use std::fmt;

use serde::{Serialize, Serializer};

/// Why a candidate recipient was left out of a broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    NoPreferences,
    PromotionalDisabled,
    CategoryDisabled(BroadcastCategory),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPreferences => f.write_str("no_preferences"),
            Self::PromotionalDisabled => f.write_str("promotional_disabled"),
            Self::CategoryDisabled(category) => write!(f, "type_{}_disabled", category),
        }
    }
}

impl Serialize for SkipReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
