use crate::BroadcastStatus;

use std::str::FromStr;

#[test]
fn test_broadcast_status_default_is_draft() {
    assert_eq!(BroadcastStatus::default(), BroadcastStatus::Draft);
}

#[test]
fn test_broadcast_status_from_str() {
    assert_eq!(
        BroadcastStatus::from_str("sending").unwrap(),
        BroadcastStatus::Sending
    );
    assert!(BroadcastStatus::from_str("queued").is_err());
}

#[test]
fn test_only_draft_and_scheduled_are_dispatchable() {
    assert!(BroadcastStatus::Draft.is_dispatchable());
    assert!(BroadcastStatus::Scheduled.is_dispatchable());
    assert!(!BroadcastStatus::Sending.is_dispatchable());
    assert!(!BroadcastStatus::Sent.is_dispatchable());
    assert!(!BroadcastStatus::Failed.is_dispatchable());
}

#[test]
fn test_sending_can_finish_or_fall_back_to_draft() {
    let sending = BroadcastStatus::Sending;
    assert!(sending.can_transition_to(BroadcastStatus::Sent));
    assert!(sending.can_transition_to(BroadcastStatus::Failed));
    assert!(sending.can_transition_to(BroadcastStatus::Draft));
    assert!(!BroadcastStatus::Sent.can_transition_to(BroadcastStatus::Sending));
    assert!(!BroadcastStatus::Failed.can_transition_to(BroadcastStatus::Sending));
}
