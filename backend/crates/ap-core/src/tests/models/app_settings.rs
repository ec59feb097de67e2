use crate::{AppSettings, SettingsUpdate};

use serde_json::json;

#[test]
fn test_apply_merges_sections_key_wise() {
    let mut settings: AppSettings = serde_json::from_value(json!({
        "featureFlags": { "chat_enabled": true, "stories_enabled": false },
        "maintenanceMode": false,
        "uiSettings": { "theme": "light" }
    }))
    .unwrap();

    let update: SettingsUpdate = serde_json::from_value(json!({
        "featureFlags": { "stories_enabled": true },
        "maintenanceMode": true
    }))
    .unwrap();

    settings.apply(&update);

    assert_eq!(settings.feature_flags["chat_enabled"], json!(true));
    assert_eq!(settings.feature_flags["stories_enabled"], json!(true));
    assert!(settings.maintenance_mode);
    assert_eq!(settings.ui_settings["theme"], json!("light"));
}

#[test]
fn test_ui_only_update_does_not_touch_remote_config() {
    let update: SettingsUpdate =
        serde_json::from_value(json!({ "uiSettings": { "theme": "dark" } })).unwrap();
    assert!(!update.is_empty());
    assert!(!update.touches_remote_config());
    assert!(SettingsUpdate::default().is_empty());
}
