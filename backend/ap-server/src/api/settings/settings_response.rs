use ap_core::AppSettings;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub success: bool,
    pub settings: AppSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_config_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
