//! Broadcast REST API handlers

use crate::{
    AppState, ApiResult, BroadcastDto, BroadcastListResponse, BroadcastResponse,
    BroadcastSendResponse, CreateBroadcastRequest, ListBroadcastsQuery,
};

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use uuid::Uuid;

/// POST /api/v1/broadcasts
///
/// Create a broadcast and deliver it now, or store it for its scheduled time.
pub async fn create_broadcast(
    State(state): State<AppState>,
    payload: Result<Json<CreateBroadcastRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<BroadcastSendResponse>)> {
    let Json(request) = payload?;
    let new_broadcast = request.into_new_broadcast()?;

    let outcome = state.broadcasts.create(new_broadcast).await?;

    Ok((StatusCode::CREATED, Json(outcome.into())))
}

/// GET /api/v1/broadcasts?limit=N
pub async fn list_broadcasts(
    State(state): State<AppState>,
    query: Result<Query<ListBroadcastsQuery>, QueryRejection>,
) -> ApiResult<Json<BroadcastListResponse>> {
    let Query(query) = query?;
    let broadcasts = state.broadcasts.list(query.effective_limit()).await?;

    Ok(Json(BroadcastListResponse {
        broadcasts: broadcasts.into_iter().map(BroadcastDto::from).collect(),
    }))
}

/// GET /api/v1/broadcasts/{id}
pub async fn get_broadcast(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BroadcastResponse>> {
    let broadcast_id = Uuid::parse_str(&id)?;
    let broadcast = state.broadcasts.get(broadcast_id).await?;

    Ok(Json(BroadcastResponse {
        broadcast: broadcast.into(),
    }))
}

/// POST /api/v1/broadcasts/{id}/send
///
/// Retry a draft, or send a scheduled broadcast whose time has come.
pub async fn send_broadcast(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BroadcastSendResponse>> {
    let broadcast_id = Uuid::parse_str(&id)?;
    let outcome = state.broadcasts.send(broadcast_id).await?;

    Ok(Json(outcome.into()))
}
