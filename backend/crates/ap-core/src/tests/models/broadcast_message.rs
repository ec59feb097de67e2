use crate::models::broadcast_message::{MAX_BODY_LENGTH, MAX_TITLE_LENGTH};
use crate::{BroadcastCategory, BroadcastMessage, BroadcastStatus, CoreError, TargetAudienceSpec};

use chrono::{Duration, Utc};

fn message(title: &str, body: &str) -> BroadcastMessage {
    BroadcastMessage::new(
        title.to_string(),
        body.to_string(),
        BroadcastCategory::Announcement,
        TargetAudienceSpec::all(),
        None,
        None,
        None,
    )
}

#[test]
fn test_new_message_without_schedule_is_draft() {
    let msg = message("Hello", "World");
    assert_eq!(msg.status, BroadcastStatus::Draft);
    assert_eq!(msg.stats.total_recipients, 0);
    assert!(msg.sent_at.is_none());
}

#[test]
fn test_new_message_with_future_schedule_is_scheduled() {
    let msg = BroadcastMessage::new(
        "Later".to_string(),
        "Soon".to_string(),
        BroadcastCategory::Event,
        TargetAudienceSpec::all(),
        None,
        None,
        Some(Utc::now() + Duration::hours(1)),
    );
    assert_eq!(msg.status, BroadcastStatus::Scheduled);
    assert!(!msg.is_due(Utc::now()));
    assert!(msg.is_due(Utc::now() + Duration::hours(2)));
}

#[test]
fn test_validate_rejects_blank_title() {
    let err = message("   ", "body").validate().unwrap_err();
    assert_eq!(err.field(), Some("title"));
}

#[test]
fn test_validate_rejects_oversized_fields() {
    let long_title = "t".repeat(MAX_TITLE_LENGTH + 1);
    assert!(message(&long_title, "body").validate().is_err());

    let long_body = "b".repeat(MAX_BODY_LENGTH + 1);
    let err = message("title", &long_body).validate().unwrap_err();
    assert_eq!(err.field(), Some("body"));
}

#[test]
fn test_validate_checks_audience() {
    let mut msg = message("title", "body");
    msg.target_audience = TargetAudienceSpec::role("  ");
    assert!(matches!(
        msg.validate(),
        Err(CoreError::InvalidAudience { .. })
    ));
}

#[test]
fn test_transition_to_sent_stamps_sent_at() {
    let mut msg = message("title", "body");
    msg.transition_to(BroadcastStatus::Sending).unwrap();
    msg.transition_to(BroadcastStatus::Sent).unwrap();
    assert_eq!(msg.status, BroadcastStatus::Sent);
    assert!(msg.sent_at.is_some());
}

#[test]
fn test_transition_from_sent_is_rejected() {
    let mut msg = message("title", "body");
    msg.status = BroadcastStatus::Sent;
    assert!(matches!(
        msg.transition_to(BroadcastStatus::Sending),
        Err(CoreError::InvalidStatusTransition { .. })
    ));
}

#[test]
fn test_message_serializes_camel_case() {
    let msg = message("title", "body");
    let value = serde_json::to_value(&msg).unwrap();
    assert!(value.get("targetAudience").is_some());
    assert_eq!(value["targetAudience"]["type"], "all");
    assert_eq!(value["stats"]["totalRecipients"], 0);
    assert_eq!(value["status"], "draft");
}
