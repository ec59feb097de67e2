use serde::Deserialize;

pub const DEFAULT_LIST_LIMIT: u32 = 50;
pub const MAX_LIST_LIMIT: u32 = 200;

#[derive(Debug, Default, Deserialize)]
pub struct ListBroadcastsQuery {
    #[serde(default)]
    pub limit: Option<u32>,
}

impl ListBroadcastsQuery {
    /// Requested limit clamped to 1..=200, 50 when absent.
    pub fn effective_limit(&self) -> u32 {
        self.limit
            .unwrap_or(DEFAULT_LIST_LIMIT)
            .clamp(1, MAX_LIST_LIMIT)
    }
}
