use crate::{ApiError, UpdateSettingsRequest};

use serde_json::json;

#[test]
fn given_only_ui_settings_when_converting_then_not_touching_remote_config() {
    let request: UpdateSettingsRequest =
        serde_json::from_value(json!({"uiSettings": {"theme": "dark"}})).unwrap();

    let update = request.into_update().unwrap();

    assert!(!update.touches_remote_config());
    assert_eq!(update.ui_settings.unwrap()["theme"], "dark");
}

#[test]
fn given_maintenance_flag_when_converting_then_touches_remote_config() {
    let request: UpdateSettingsRequest =
        serde_json::from_value(json!({"maintenanceMode": false})).unwrap();

    let update = request.into_update().unwrap();

    assert!(update.touches_remote_config());
}

#[test]
fn given_no_sections_when_converting_then_validation_error() {
    let request: UpdateSettingsRequest = serde_json::from_value(json!({})).unwrap();

    assert!(matches!(
        request.into_update(),
        Err(ApiError::Validation { .. })
    ));
}
