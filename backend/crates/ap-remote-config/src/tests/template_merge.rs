use crate::template_merge::{FEATURE_FLAGS_PARAM, MAINTENANCE_MODE_PARAM};
use crate::{ConfigUpdate, apply_update};

use ap_core::{ConfigParameter, ConfigTemplate, SettingsUpdate, ValueType};

use proptest::prelude::*;
use serde_json::{Map, Value, json};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected object"),
    }
}

fn bundle(template: &ConfigTemplate) -> Value {
    serde_json::from_str(template.value(FEATURE_FLAGS_PARAM).unwrap()).unwrap()
}

#[test]
fn given_legacy_flag_names_when_merged_then_logical_params_written() {
    // Given
    let mut template = ConfigTemplate::default();
    let update = ConfigUpdate {
        feature_flags: Some(object(json!({
            "chatEnabled": true,
            "darkMode": false,
            "beta_banner": "spring"
        }))),
        ..ConfigUpdate::default()
    };

    // When
    apply_update(&mut template, &update);

    // Then
    assert_eq!(template.value("chat_enabled"), Some("true"));
    assert_eq!(template.value("dark_mode_enabled"), Some("false"));
    assert_eq!(template.value("chatEnabled"), None);
    assert_eq!(
        template.parameters["chat_enabled"].value_type,
        Some(ValueType::Boolean)
    );
    assert_eq!(
        bundle(&template),
        json!({"chat_enabled": true, "dark_mode_enabled": false, "beta_banner": "spring"})
    );
    assert_eq!(
        template.parameters[FEATURE_FLAGS_PARAM].value_type,
        Some(ValueType::Json)
    );
}

#[test]
fn given_published_bundle_when_partially_updated_then_other_flags_kept() {
    // Given
    let mut template = ConfigTemplate::default();
    template.set_value(
        FEATURE_FLAGS_PARAM,
        json!({"stories_enabled": true, "beta_banner": "winter"}).to_string(),
        ValueType::Json,
    );
    let update = ConfigUpdate {
        feature_flags: Some(object(json!({"enableMarketplace": 1}))),
        ..ConfigUpdate::default()
    };

    // When
    apply_update(&mut template, &update);

    // Then
    assert_eq!(
        bundle(&template),
        json!({"stories_enabled": true, "beta_banner": "winter", "marketplace_enabled": true})
    );
    assert_eq!(template.value("stories_enabled"), None);
}

#[test]
fn given_arbitrary_values_when_merged_then_typed_by_json_kind() {
    // Given
    let mut template = ConfigTemplate::default();
    let update = ConfigUpdate {
        values: Some(object(json!({
            "max_upload_mb": 250,
            "welcome_text": "Hi there",
            "show_banner": true,
            "home_sections": ["feed", "stories"],
            "ignored": null
        }))),
        ..ConfigUpdate::default()
    };

    // When
    apply_update(&mut template, &update);

    // Then
    assert_eq!(template.value("max_upload_mb"), Some("250"));
    assert_eq!(
        template.parameters["max_upload_mb"].value_type,
        Some(ValueType::Number)
    );
    assert_eq!(template.value("welcome_text"), Some("Hi there"));
    assert_eq!(template.value("show_banner"), Some("true"));
    assert_eq!(
        template.value("home_sections"),
        Some(r#"["feed","stories"]"#)
    );
    assert_eq!(
        template.parameters["home_sections"].value_type,
        Some(ValueType::Json)
    );
    assert!(!template.parameters.contains_key("ignored"));
}

#[test]
fn given_maintenance_mode_when_merged_then_boolean_literal_written() {
    let mut template = ConfigTemplate::default();
    let update = ConfigUpdate {
        maintenance_mode: Some(true),
        ..ConfigUpdate::default()
    };

    apply_update(&mut template, &update);

    assert_eq!(template.value(MAINTENANCE_MODE_PARAM), Some("true"));
}

#[test]
fn given_parameter_with_description_when_updated_then_description_kept() {
    // Given
    let mut template = ConfigTemplate::default();
    template.parameters.insert(
        "welcome_text".to_string(),
        ConfigParameter {
            description: Some("Shown on first launch".to_string()),
            ..ConfigParameter::default()
        },
    );
    let update = ConfigUpdate {
        values: Some(object(json!({"welcome_text": "Hello"}))),
        ..ConfigUpdate::default()
    };

    // When
    apply_update(&mut template, &update);

    // Then
    let parameter = &template.parameters["welcome_text"];
    assert_eq!(parameter.description.as_deref(), Some("Shown on first launch"));
    assert_eq!(template.value("welcome_text"), Some("Hello"));
}

#[test]
fn given_settings_update_when_converted_then_ui_settings_dropped() {
    let update = SettingsUpdate {
        feature_flags: None,
        remote_config: Some(object(json!({"a": 1}))),
        maintenance_mode: Some(false),
        ui_settings: Some(object(json!({"theme": "dark"}))),
    };

    let config_update = ConfigUpdate::from(&update);

    assert_eq!(config_update.values, Some(object(json!({"a": 1}))));
    assert_eq!(config_update.maintenance_mode, Some(false));
    assert!(config_update.feature_flags.is_none());
    assert!(!config_update.is_empty());
    assert!(ConfigUpdate::default().is_empty());
}

proptest! {
    #[test]
    fn given_any_boolean_inputs_when_merged_then_boolean_params_are_literals(
        flags in proptest::collection::btree_map("[a-zA-Z_]{1,12}", any::<bool>(), 0..12),
        values in proptest::collection::btree_map("[a-z_]{1,12}", any::<bool>(), 0..12),
        maintenance in any::<bool>(),
    ) {
        let mut template = ConfigTemplate::default();
        let update = ConfigUpdate {
            feature_flags: Some(flags.into_iter().map(|(k, v)| (k, Value::Bool(v))).collect()),
            values: Some(values.into_iter().map(|(k, v)| (k, Value::Bool(v))).collect()),
            maintenance_mode: Some(maintenance),
        };

        apply_update(&mut template, &update);

        for parameter in template.parameters.values() {
            if parameter.value_type == Some(ValueType::Boolean) {
                let value = parameter
                    .default_value
                    .as_ref()
                    .and_then(|v| v.value.as_deref());
                prop_assert!(matches!(value, Some("true") | Some("false")));
            }
        }
    }
}
