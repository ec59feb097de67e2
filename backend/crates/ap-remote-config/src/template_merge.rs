use crate::flag_aliases::{FLAG_ALIASES, is_aliased};

use ap_core::{ConfigTemplate, SettingsUpdate, ValueType};

use serde_json::{Map, Value};

/// Template parameter holding the JSON bundle of all feature flags.
pub const FEATURE_FLAGS_PARAM: &str = "feature_flags";
pub const MAINTENANCE_MODE_PARAM: &str = "maintenance_mode";

/// The parts of a settings update that are published to remote config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigUpdate {
    pub feature_flags: Option<Map<String, Value>>,
    /// Arbitrary key/value parameters.
    pub values: Option<Map<String, Value>>,
    pub maintenance_mode: Option<bool>,
}

impl ConfigUpdate {
    pub fn is_empty(&self) -> bool {
        self.feature_flags.is_none() && self.values.is_none() && self.maintenance_mode.is_none()
    }
}

impl From<&SettingsUpdate> for ConfigUpdate {
    fn from(update: &SettingsUpdate) -> Self {
        Self {
            feature_flags: update.feature_flags.clone(),
            values: update.remote_config.clone(),
            maintenance_mode: update.maintenance_mode,
        }
    }
}

/// Apply `update` onto a freshly fetched template.
///
/// Parameters not named by the update keep their current value, description
/// and conditional values.
pub fn apply_update(template: &mut ConfigTemplate, update: &ConfigUpdate) {
    if let Some(flags) = &update.feature_flags {
        merge_feature_flags(template, flags);
    }

    if let Some(values) = &update.values {
        for (key, value) in values {
            set_json_value(template, key, value);
        }
    }

    if let Some(maintenance) = update.maintenance_mode {
        template.set_bool(MAINTENANCE_MODE_PARAM, maintenance);
    }
}

fn merge_feature_flags(template: &mut ConfigTemplate, incoming: &Map<String, Value>) {
    let mut bundle = existing_bundle(template);

    for alias in FLAG_ALIASES {
        if let Some(enabled) = alias.resolve(incoming) {
            bundle.insert(alias.flag.to_string(), Value::Bool(enabled));
            template.set_bool(alias.flag, enabled);
        }
    }

    for (key, value) in incoming {
        if !is_aliased(key) && !value.is_null() {
            bundle.insert(key.clone(), value.clone());
        }
    }

    template.set_value(
        FEATURE_FLAGS_PARAM,
        Value::Object(bundle).to_string(),
        ValueType::Json,
    );
}

/// The bundle already published, so a partial update does not drop flags.
fn existing_bundle(template: &ConfigTemplate) -> Map<String, Value> {
    template
        .value(FEATURE_FLAGS_PARAM)
        .and_then(|raw| serde_json::from_str::<Value>(raw).ok())
        .and_then(|value| match value {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .unwrap_or_default()
}

fn set_json_value(template: &mut ConfigTemplate, key: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => template.set_bool(key, *b),
        Value::Number(n) => template.set_value(key, n.to_string(), ValueType::Number),
        Value::String(s) => template.set_value(key, s.clone(), ValueType::String),
        Value::Array(_) | Value::Object(_) => {
            template.set_value(key, value.to_string(), ValueType::Json)
        }
    }
}
