use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastStats {
    pub total_recipients: u64,
    pub delivered: u64,
    pub opened: u64,
    pub clicked: u64,
}
