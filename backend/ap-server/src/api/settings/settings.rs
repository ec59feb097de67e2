//! Platform settings REST API handlers

use crate::settings_service::SYNC_FAILED_WARNING;
use crate::{AppState, ApiResult, SettingsResponse, UpdateSettingsRequest};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

/// GET /api/v1/settings
pub async fn get_settings(State(state): State<AppState>) -> ApiResult<Json<SettingsResponse>> {
    let settings = state.settings.get().await?;

    Ok(Json(SettingsResponse {
        success: true,
        settings,
        remote_config_error: None,
        warning: None,
    }))
}

/// PUT /api/v1/settings
///
/// Save first, then publish. A failed publish still answers 200 with a warning.
pub async fn update_settings(
    State(state): State<AppState>,
    payload: Result<Json<UpdateSettingsRequest>, JsonRejection>,
) -> ApiResult<Json<SettingsResponse>> {
    let Json(request) = payload?;
    let update = request.into_update()?;

    let outcome = state.settings.update(&update).await?;
    let warning = outcome
        .remote_config_error
        .as_ref()
        .map(|_| SYNC_FAILED_WARNING.to_string());

    Ok(Json(SettingsResponse {
        success: true,
        settings: outcome.settings,
        remote_config_error: outcome.remote_config_error,
        warning,
    }))
}
