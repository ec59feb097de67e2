use crate::{ApiError, ApiResult};

use ap_core::SettingsUpdate;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Partial settings update. Supplied sections are merged key-wise.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    #[serde(default)]
    pub feature_flags: Option<Map<String, Value>>,

    #[serde(default)]
    pub remote_config: Option<Map<String, Value>>,

    #[serde(default)]
    pub maintenance_mode: Option<bool>,

    /// Stored only, never published to remote config
    #[serde(default)]
    pub ui_settings: Option<Map<String, Value>>,
}

impl UpdateSettingsRequest {
    #[track_caller]
    pub fn into_update(self) -> ApiResult<SettingsUpdate> {
        let update = SettingsUpdate {
            feature_flags: self.feature_flags,
            remote_config: self.remote_config,
            maintenance_mode: self.maintenance_mode,
            ui_settings: self.ui_settings,
        };

        if update.is_empty() {
            return Err(ApiError::Validation {
                message: "At least one of featureFlags, remoteConfig, maintenanceMode or uiSettings is required".to_string(),
                field: None,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(update)
    }
}
