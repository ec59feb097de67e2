use crate::{Audience, CoreError, TargetAudienceSpec};

#[test]
fn test_role_audience_is_trimmed() {
    let audience = TargetAudienceSpec::role(" admin ").audience().unwrap();
    assert_eq!(audience, Audience::Role("admin".to_string()));
}

#[test]
fn test_activity_days_range() {
    assert_eq!(
        TargetAudienceSpec::activity(None).audience().unwrap(),
        Audience::Activity { days: None }
    );
    assert_eq!(
        TargetAudienceSpec::activity(Some(7)).audience().unwrap(),
        Audience::Activity { days: Some(7) }
    );
    assert!(TargetAudienceSpec::activity(Some(0)).audience().is_err());
    assert!(TargetAudienceSpec::activity(Some(366)).audience().is_err());
}

#[test]
fn test_custom_audience_requires_user_ids() {
    let mut spec = TargetAudienceSpec::custom(vec!["u1".to_string()]);
    assert_eq!(
        spec.audience().unwrap(),
        Audience::Custom(vec!["u1".to_string()])
    );

    spec.filters.user_ids = None;
    assert!(matches!(
        spec.audience(),
        Err(CoreError::InvalidAudience { .. })
    ));
}

#[test]
fn test_deserialize_wire_shape() {
    let spec: TargetAudienceSpec =
        serde_json::from_str(r#"{"type":"custom","filters":{"userIds":["a","b"]}}"#).unwrap();
    assert_eq!(
        spec.audience().unwrap(),
        Audience::Custom(vec!["a".to_string(), "b".to_string()])
    );

    let all: TargetAudienceSpec = serde_json::from_str(r#"{"type":"all"}"#).unwrap();
    assert_eq!(all.audience().unwrap(), Audience::All);
}
