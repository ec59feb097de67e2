use crate::{ConfigError, ConfigErrorResult, DEFAULT_PUSH_BASE_URL};

use serde::Deserialize;

pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Push gateway (FCM HTTP v1 compatible) connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PushConfig {
    pub base_url: String,
    pub project_id: Option<String>,
    /// Bearer token sent with every request. Never logged.
    pub access_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_PUSH_BASE_URL),
            project_id: None,
            access_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl PushConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.base_url) {
            return Err(ConfigError::push(format!(
                "push.base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::push(format!(
                "push.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    /// Message send URL for the configured project.
    pub fn send_url(&self) -> Option<String> {
        self.project_id.as_ref().map(|project| {
            format!(
                "{}/v1/projects/{}/messages:send",
                self.base_url.trim_end_matches('/'),
                project
            )
        })
    }
}

pub(crate) fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
