use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The primary platform settings document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    #[serde(default)]
    pub feature_flags: Map<String, Value>,
    #[serde(default)]
    pub remote_config: Map<String, Value>,
    #[serde(default)]
    pub maintenance_mode: bool,
    #[serde(default)]
    pub ui_settings: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial settings update; absent sections are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_flags: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_config: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_settings: Option<Map<String, Value>>,
}

impl AppSettings {
    /// Merge each supplied section key-wise into the current document.
    pub fn apply(&mut self, update: &SettingsUpdate) {
        if let Some(flags) = &update.feature_flags {
            merge_into(&mut self.feature_flags, flags);
        }
        if let Some(values) = &update.remote_config {
            merge_into(&mut self.remote_config, values);
        }
        if let Some(maintenance) = update.maintenance_mode {
            self.maintenance_mode = maintenance;
        }
        if let Some(ui) = &update.ui_settings {
            merge_into(&mut self.ui_settings, ui);
        }
    }
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.feature_flags.is_none()
            && self.remote_config.is_none()
            && self.maintenance_mode.is_none()
            && self.ui_settings.is_none()
    }

    /// Whether any section that is published to remote config was supplied.
    pub fn touches_remote_config(&self) -> bool {
        self.feature_flags.is_some()
            || self.remote_config.is_some()
            || self.maintenance_mode.is_some()
    }
}

fn merge_into(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, value) in source {
        target.insert(key.clone(), value.clone());
    }
}
