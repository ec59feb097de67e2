use crate::ApiError;

use ap_broadcast::BroadcastError;
use ap_core::StoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use uuid::Uuid;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Broadcast not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Broadcast not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_400_with_field() {
    let error = ApiError::Validation {
        message: "title is required".into(),
        field: Some("title".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn given_invalid_state_when_converted_then_conflict() {
    let error = ApiError::from(BroadcastError::invalid_state(Uuid::new_v4(), "sent"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert!(json["error"]["message"].as_str().unwrap().contains("sent"));
}

#[tokio::test]
async fn given_missing_broadcast_when_converted_then_not_found() {
    let id = Uuid::new_v4();
    let error = ApiError::from(BroadcastError::not_found(id));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains(&id.to_string())
    );
}

#[tokio::test]
async fn given_store_failure_when_converted_then_internal_without_details() {
    let error = ApiError::from(BroadcastError::from(StoreError::backend(
        "disk I/O error at /var/lib/ap/data.db",
    )));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(
        !json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("/var/lib")
    );
}

#[tokio::test]
async fn given_bad_uuid_when_converted_then_validation_error() {
    let parse_error = Uuid::parse_str("nope").unwrap_err();

    let (status, json) = body_json(ApiError::from(parse_error)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}
