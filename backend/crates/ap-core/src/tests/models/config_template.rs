use crate::models::config_template::{FALSE_LITERAL, TRUE_LITERAL, bool_literal};
use crate::{ConfigTemplate, ValueType};

#[test]
fn test_bool_literals() {
    assert_eq!(bool_literal(true), TRUE_LITERAL);
    assert_eq!(bool_literal(false), FALSE_LITERAL);
}

#[test]
fn test_set_value_keeps_description() {
    let mut template: ConfigTemplate = serde_json::from_str(
        r#"{"parameters":{"chat_enabled":{"defaultValue":{"value":"false"},"description":"Chat"}},"version":{"versionNumber":"4"}}"#,
    )
    .unwrap();

    template.set_bool("chat_enabled", true);

    assert_eq!(template.value("chat_enabled"), Some("true"));
    let param = &template.parameters["chat_enabled"];
    assert_eq!(param.description.as_deref(), Some("Chat"));
    assert_eq!(param.value_type, Some(ValueType::Boolean));
    assert!(template.extra.contains_key("version"));
}

#[test]
fn test_etag_is_not_serialized() {
    let mut template = ConfigTemplate::with_etag("etag-1");
    template.set_value("max_upload_mb", "25".to_string(), ValueType::Number);

    let value = serde_json::to_value(&template).unwrap();
    assert!(value.get("etag").is_none());
    assert_eq!(
        value["parameters"]["max_upload_mb"]["valueType"],
        "NUMBER"
    );
}
