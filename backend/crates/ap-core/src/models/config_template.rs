use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Literal used for `true` in template parameters.
pub const TRUE_LITERAL: &str = "true";
/// Literal used for `false` in template parameters.
pub const FALSE_LITERAL: &str = "false";

/// Remote configuration template: string-keyed parameters plus the
/// concurrency token the server expects back on publish.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigTemplate {
    #[serde(default)]
    pub parameters: BTreeMap<String, ConfigParameter>,
    /// Version marker (ETag). Travels in headers, never in the JSON body.
    #[serde(skip)]
    pub etag: Option<String>,
    /// Conditions, parameter groups and version metadata are passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigParameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<ParameterValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ValueType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParameterValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_in_app_default: Option<bool>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueType {
    String,
    Boolean,
    Number,
    Json,
}

impl ConfigTemplate {
    pub fn with_etag(etag: impl Into<String>) -> Self {
        Self {
            etag: Some(etag.into()),
            ..Self::default()
        }
    }

    /// Default value of `key`, if set.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.parameters
            .get(key)
            .and_then(|p| p.default_value.as_ref())
            .and_then(|v| v.value.as_deref())
    }

    /// Set the default value of `key`, keeping any description or
    /// conditional values already on the parameter.
    pub fn set_value(&mut self, key: &str, value: String, value_type: ValueType) {
        let parameter = self.parameters.entry(key.to_string()).or_default();
        parameter.default_value = Some(ParameterValue {
            value: Some(value),
            use_in_app_default: None,
        });
        parameter.value_type = Some(value_type);
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.set_value(key, bool_literal(value).to_string(), ValueType::Boolean);
    }
}

pub fn bool_literal(value: bool) -> &'static str {
    if value { TRUE_LITERAL } else { FALSE_LITERAL }
}
