#![allow(dead_code)]

//! Test infrastructure for ap-server API tests

use ap_config::Config;
use ap_core::{
    BroadcastCategory, DeliveryFailure, DeliveryToken, MulticastResponse, PushGateway,
    PushGatewayError, PushPayload, RecipientPreference, TokenSendResult,
};
use ap_db::{DeliveryTokenRepository, PreferenceRepository, RecipientRepository};
use ap_remote_config::ConfigSyncEngine;
use ap_server::AppState;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusBuilder;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Push gateway that accepts every token except those starting with `dead-`,
/// which it reports as unregistered.
#[derive(Default)]
pub struct RecordingGateway {
    sent: Mutex<Vec<String>>,
}

impl RecordingGateway {
    pub fn sent_tokens(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl PushGateway for RecordingGateway {
    async fn send_multicast(
        &self,
        _payload: &PushPayload,
        tokens: &[String],
    ) -> Result<MulticastResponse, PushGatewayError> {
        let mut sent = self.sent.lock().unwrap();
        let responses = tokens
            .iter()
            .map(|token| {
                sent.push(token.clone());
                if token.starts_with("dead-") {
                    TokenSendResult::failed(
                        token,
                        DeliveryFailure::from_code("UNREGISTERED", "token not registered"),
                    )
                } else {
                    TokenSendResult::delivered(token)
                }
            })
            .collect();

        Ok(MulticastResponse { responses })
    }
}

pub struct TestApp {
    pub state: AppState,
    pub gateway: Arc<RecordingGateway>,
}

impl TestApp {
    pub fn router(&self) -> Router {
        ap_server::build_router(self.state.clone())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.state.pool
    }
}

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.broadcast.batch_delay_ms = 0;
    config
}

/// App over a fresh in-memory database, without remote config sync.
pub async fn create_test_app() -> TestApp {
    create_test_app_with_sync(None).await
}

pub async fn create_test_app_with_sync(sync: Option<ConfigSyncEngine>) -> TestApp {
    let pool = ap_db::create_in_memory_pool()
        .await
        .expect("Failed to create test database");
    let gateway = Arc::new(RecordingGateway::default());
    let prometheus = PrometheusBuilder::new().build_recorder().handle();

    let state = AppState::new(pool, &test_config(), gateway.clone(), sync, prometheus);

    TestApp { state, gateway }
}

pub async fn create_test_user(pool: &SqlitePool, user_id: &str, role: &str) {
    RecipientRepository::new(pool.clone())
        .create_user(user_id, role)
        .await
        .expect("Failed to create test user");
}

pub async fn create_test_preference(
    pool: &SqlitePool,
    user_id: &str,
    promotional_enabled: bool,
    disabled: &[BroadcastCategory],
) {
    let preference = disabled.iter().fold(
        RecipientPreference::new(user_id, promotional_enabled),
        |preference, category| preference.with_category(*category, false),
    );

    PreferenceRepository::new(pool.clone())
        .upsert(&preference)
        .await
        .expect("Failed to create test preference");
}

pub async fn create_test_token(pool: &SqlitePool, user_id: &str, token: &str) {
    DeliveryTokenRepository::new(pool.clone())
        .upsert(&DeliveryToken::new(user_id, token))
        .await
        .expect("Failed to create test token");
}

/// Consenting user with one delivery token named `token-<id>`.
pub async fn create_reachable_user(pool: &SqlitePool, user_id: &str, role: &str) {
    create_test_user(pool, user_id, role).await;
    create_test_preference(pool, user_id, true, &[]).await;
    create_test_token(pool, user_id, &format!("token-{}", user_id)).await;
}

pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(json) => request.body(Body::from(json.to_string())).unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}
