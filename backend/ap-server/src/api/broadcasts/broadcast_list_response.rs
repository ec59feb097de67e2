use crate::BroadcastDto;

use serde::Serialize;

/// Most recent broadcasts first
#[derive(Debug, Serialize)]
pub struct BroadcastListResponse {
    pub broadcasts: Vec<BroadcastDto>,
}
