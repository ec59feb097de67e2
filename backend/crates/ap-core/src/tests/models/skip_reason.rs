use crate::{BroadcastCategory, SkipReason};

#[test]
fn test_skip_reason_labels() {
    assert_eq!(SkipReason::NoPreferences.to_string(), "no_preferences");
    assert_eq!(
        SkipReason::PromotionalDisabled.to_string(),
        "promotional_disabled"
    );
    assert_eq!(
        SkipReason::CategoryDisabled(BroadcastCategory::FeatureUpdate).to_string(),
        "type_feature_update_disabled"
    );
}

#[test]
fn test_skip_reason_serializes_as_label() {
    let json = serde_json::to_string(&SkipReason::CategoryDisabled(BroadcastCategory::Promo)).unwrap();
    assert_eq!(json, "\"type_promo_disabled\"");
}
