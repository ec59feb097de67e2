use crate::BroadcastDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BroadcastResponse {
    pub broadcast: BroadcastDto,
}
