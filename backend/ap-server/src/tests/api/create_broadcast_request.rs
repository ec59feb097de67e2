use crate::{ApiError, CreateBroadcastRequest};

use ap_core::{AudienceType, BroadcastCategory};

use serde_json::json;

fn request(value: serde_json::Value) -> CreateBroadcastRequest {
    serde_json::from_value(value).unwrap()
}

#[test]
fn given_full_request_when_converting_then_fields_are_parsed() {
    let new_broadcast = request(json!({
        "title": "Launch",
        "body": "Stories are here",
        "category": "feature_update",
        "targetAudience": {"type": "activity", "filters": {"days": 14}},
        "imageUrl": "https://cdn.example.com/stories.png",
        "deepLink": "  ",
        "scheduledFor": "2030-01-01T09:00:00Z"
    }))
    .into_new_broadcast()
    .unwrap();

    assert_eq!(new_broadcast.category, BroadcastCategory::FeatureUpdate);
    assert_eq!(
        new_broadcast.target_audience.audience_type,
        AudienceType::Activity
    );
    assert_eq!(new_broadcast.target_audience.filters.days, Some(14));
    assert_eq!(
        new_broadcast.image_url.as_deref(),
        Some("https://cdn.example.com/stories.png")
    );
    assert_eq!(new_broadcast.deep_link, None);
    assert!(new_broadcast.scheduled_for.is_some());
}

#[test]
fn given_missing_audience_when_converting_then_validation_error_on_audience() {
    let result = request(json!({
        "title": "Hello",
        "body": "World",
        "category": "announcement"
    }))
    .into_new_broadcast();

    match result {
        Err(ApiError::Validation { field, .. }) => {
            assert_eq!(field.as_deref(), Some("targetAudience"))
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn given_unknown_category_when_converting_then_validation_error_on_category() {
    let result = request(json!({
        "title": "Hello",
        "body": "World",
        "category": "rumour",
        "targetAudience": {"type": "all"}
    }))
    .into_new_broadcast();

    match result {
        Err(ApiError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("category")),
        other => panic!("expected validation error, got {:?}", other),
    }
}
