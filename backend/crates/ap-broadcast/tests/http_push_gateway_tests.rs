//! HttpPushGateway against a mock FCM v1 endpoint.

use ap_broadcast::HttpPushGateway;
use ap_broadcast::http_push_gateway::classify_error;
use ap_core::{PushGateway, PushGatewayError, PushPayload};

use std::collections::BTreeMap;
use std::time::Duration;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

const SEND_PATH: &str = "/v1/projects/demo-app/messages:send";

fn payload() -> PushPayload {
    let mut data = BTreeMap::new();
    data.insert("type".to_string(), "broadcast".to_string());
    PushPayload {
        title: "Hello".to_string(),
        body: "World".to_string(),
        image_url: Some("https://cdn.example.com/a.png".to_string()),
        data,
    }
}

fn gateway(server: &MockServer) -> HttpPushGateway {
    HttpPushGateway::new(
        Some(format!("{}{}", server.uri(), SEND_PATH)),
        Some("test-access-token".to_string()),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_send_multicast_all_delivered() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(header("authorization", "Bearer test-access-token"))
        .and(body_partial_json(json!({
            "message": {
                "notification": {"title": "Hello", "body": "World", "image": "https://cdn.example.com/a.png"},
                "data": {"type": "broadcast"}
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "projects/demo-app/messages/1"
        })))
        .expect(2)
        .mount(&server)
        .await;

    let response = gateway(&server)
        .send_multicast(&payload(), &["tok-a".to_string(), "tok-b".to_string()])
        .await
        .unwrap();

    assert_eq!(response.success_count(), 2);
    assert_eq!(response.failure_count(), 0);
    assert_eq!(response.responses[0].token, "tok-a");
    assert_eq!(response.responses[1].token, "tok-b");
}

#[tokio::test]
async fn test_send_multicast_unregistered_token_is_dead() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(body_partial_json(json!({"message": {"token": "tok-dead"}})))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": 404,
                "message": "Requested entity was not found.",
                "status": "NOT_FOUND",
                "details": [{
                    "@type": "type.googleapis.com/google.firebase.fcm.v1.FcmError",
                    "errorCode": "UNREGISTERED"
                }]
            }
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(body_partial_json(json!({"message": {"token": "tok-live"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "x"})))
        .mount(&server)
        .await;

    let response = gateway(&server)
        .send_multicast(&payload(), &["tok-dead".to_string(), "tok-live".to_string()])
        .await
        .unwrap();

    assert_eq!(response.success_count(), 1);
    let dead: Vec<&str> = response.dead_tokens().collect();
    assert_eq!(dead, vec!["tok-dead"]);
    let failure = response.responses[0].error.as_ref().unwrap();
    assert_eq!(failure.code, "UNREGISTERED");
}

#[tokio::test]
async fn test_send_multicast_server_error_is_transient() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": {"code": 503, "message": "The service is currently unavailable.", "status": "UNAVAILABLE"}
        })))
        .mount(&server)
        .await;

    let response = gateway(&server)
        .send_multicast(&payload(), &["tok-a".to_string()])
        .await
        .unwrap();

    assert_eq!(response.failure_count(), 1);
    assert_eq!(response.dead_tokens().count(), 0);
    assert_eq!(response.responses[0].error.as_ref().unwrap().code, "UNAVAILABLE");
}

#[tokio::test]
async fn test_send_multicast_without_project_is_not_configured() {
    let gateway = HttpPushGateway::new(None, None, Duration::from_secs(1)).unwrap();

    let result = gateway
        .send_multicast(&payload(), &["tok-a".to_string()])
        .await;

    assert!(matches!(result, Err(PushGatewayError::NotConfigured { .. })));
}

#[test]
fn test_classify_invalid_argument_about_token_is_permanent() {
    let body = json!({
        "error": {
            "code": 400,
            "message": "The registration token is not a valid FCM registration token",
            "status": "INVALID_ARGUMENT"
        }
    })
    .to_string();

    let failure = classify_error(400, &body);

    assert_eq!(failure.code, "INVALID_ARGUMENT");
    assert!(failure.permanent);
}

#[test]
fn test_classify_invalid_argument_about_payload_is_transient() {
    let body = json!({
        "error": {
            "code": 400,
            "message": "Invalid value at 'message.data'",
            "status": "INVALID_ARGUMENT"
        }
    })
    .to_string();

    let failure = classify_error(400, &body);

    assert!(!failure.permanent);
}

#[test]
fn test_classify_unparseable_body_falls_back_to_http_status() {
    let failure = classify_error(502, "<html>Bad Gateway</html>");

    assert_eq!(failure.code, "HTTP_502");
    assert!(!failure.permanent);
}

#[tokio::test]
async fn test_https_endpoint_fails_at_connect_not_for_missing_tls() {
    // Nothing listens on port 1; the attempt must get as far as connecting.
    let gateway = HttpPushGateway::new(
        Some(format!("https://127.0.0.1:1{}", SEND_PATH)),
        None,
        Duration::from_secs(5),
    )
    .unwrap();

    let response = gateway
        .send_multicast(&payload(), &["tok-a".to_string()])
        .await
        .unwrap();

    let failure = response.responses[0].error.as_ref().unwrap();
    assert_eq!(failure.code, "TRANSPORT");
    assert!(!failure.permanent);
    assert!(
        !failure.message.contains("scheme is not http"),
        "https unsupported by the client: {}",
        failure.message
    );
}
