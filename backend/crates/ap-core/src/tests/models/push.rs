use crate::{DeliveryFailure, MulticastResponse, TokenSendResult};

#[test]
fn test_permanent_codes_are_classified() {
    assert!(DeliveryFailure::from_code("UNREGISTERED", "gone").permanent);
    assert!(
        DeliveryFailure::from_code("messaging/registration-token-not-registered", "gone").permanent
    );
    assert!(!DeliveryFailure::from_code("UNAVAILABLE", "retry later").permanent);
    assert!(!DeliveryFailure::transient("INTERNAL", "boom").permanent);
}

#[test]
fn test_multicast_counts_and_dead_tokens() {
    let response = MulticastResponse {
        responses: vec![
            TokenSendResult::delivered("t1"),
            TokenSendResult::failed("t2", DeliveryFailure::from_code("UNREGISTERED", "gone")),
            TokenSendResult::failed("t3", DeliveryFailure::transient("UNAVAILABLE", "busy")),
        ],
    };

    assert_eq!(response.success_count(), 1);
    assert_eq!(response.failure_count(), 2);
    assert_eq!(response.dead_tokens().collect::<Vec<_>>(), vec!["t2"]);
}
