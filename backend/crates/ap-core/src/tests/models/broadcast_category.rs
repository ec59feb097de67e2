use crate::BroadcastCategory;

use std::str::FromStr;

#[test]
fn test_broadcast_category_round_trips_through_str() {
    for category in BroadcastCategory::ALL {
        assert_eq!(
            BroadcastCategory::from_str(category.as_str()).unwrap(),
            category
        );
    }
}

#[test]
fn test_broadcast_category_rejects_unknown() {
    assert!(BroadcastCategory::from_str("newsletter").is_err());
    assert!(BroadcastCategory::from_str("Promo").is_err());
}

#[test]
fn test_broadcast_category_serde_uses_snake_case() {
    let json = serde_json::to_string(&BroadcastCategory::FeatureUpdate).unwrap();
    assert_eq!(json, "\"feature_update\"");
}
