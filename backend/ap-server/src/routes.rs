use crate::{
    AppState, create_broadcast, get_broadcast, get_settings, health, list_broadcasts,
    send_broadcast, update_settings,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health and metrics
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics))
        // Broadcasts
        .route(
            "/api/v1/broadcasts",
            get(list_broadcasts).post(create_broadcast),
        )
        .route("/api/v1/broadcasts/{id}", get(get_broadcast))
        .route("/api/v1/broadcasts/{id}/send", post(send_broadcast))
        // Settings
        .route(
            "/api/v1/settings",
            get(get_settings).put(update_settings),
        )
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
