pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod settings_service;
pub mod shutdown;

#[cfg(test)]
mod tests;

pub use api::{
    broadcasts::{
        broadcast_dto::BroadcastDto,
        broadcast_list_response::BroadcastListResponse,
        broadcast_response::BroadcastResponse,
        broadcast_send_response::BroadcastSendResponse,
        broadcasts::{create_broadcast, get_broadcast, list_broadcasts, send_broadcast},
        create_broadcast_request::CreateBroadcastRequest,
        list_broadcasts_query::ListBroadcastsQuery,
    },
    error::ApiError,
    error::Result as ApiResult,
    settings::{
        settings::{get_settings, update_settings},
        settings_response::SettingsResponse,
        update_settings_request::UpdateSettingsRequest,
    },
};
pub use app_state::AppState;
pub use error::{Result, ServerError};
pub use settings_service::{SettingsOutcome, SettingsService};
pub use shutdown::ShutdownCoordinator;

pub use crate::routes::build_router;
