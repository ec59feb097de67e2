use crate::push_config::is_http_url;
use crate::{ConfigError, ConfigErrorResult, DEFAULT_REMOTE_CONFIG_BASE_URL};

use serde::Deserialize;

pub const MIN_MAX_ATTEMPTS: u32 = 1;
pub const MAX_MAX_ATTEMPTS: u32 = 10;
pub const DEFAULT_CONFLICT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_SERVER_MAX_ATTEMPTS: u32 = 2;

pub const MAX_BACKOFF_MS: u64 = 60_000;
pub const DEFAULT_CONFLICT_BACKOFF_MS: u64 = 1000;
pub const DEFAULT_SERVER_BACKOFF_MS: u64 = 2000;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Remote configuration sync settings, the `[remote_config]` table.
///
/// Backoff is linear: the wait before attempt `n + 1` is `n * backoff_ms`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteSyncConfig {
    pub enabled: bool,
    pub base_url: String,
    pub project_id: Option<String>,
    /// Bearer token sent with every request. Never logged.
    pub access_token: Option<String>,
    pub timeout_secs: u64,
    pub conflict_max_attempts: u32,
    pub conflict_backoff_ms: u64,
    pub server_max_attempts: u32,
    pub server_backoff_ms: u64,
}

impl Default for RemoteSyncConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: String::from(DEFAULT_REMOTE_CONFIG_BASE_URL),
            project_id: None,
            access_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            conflict_max_attempts: DEFAULT_CONFLICT_MAX_ATTEMPTS,
            conflict_backoff_ms: DEFAULT_CONFLICT_BACKOFF_MS,
            server_max_attempts: DEFAULT_SERVER_MAX_ATTEMPTS,
            server_backoff_ms: DEFAULT_SERVER_BACKOFF_MS,
        }
    }
}

impl RemoteSyncConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.base_url) {
            return Err(ConfigError::remote_config(format!(
                "remote_config.base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        if self.enabled && self.project_id.as_deref().is_none_or(|p| p.trim().is_empty()) {
            return Err(ConfigError::remote_config(
                "remote_config.project_id is required when remote_config.enabled = true",
            ));
        }

        Self::check_attempts("conflict_max_attempts", self.conflict_max_attempts)?;
        Self::check_attempts("server_max_attempts", self.server_max_attempts)?;
        Self::check_backoff("conflict_backoff_ms", self.conflict_backoff_ms)?;
        Self::check_backoff("server_backoff_ms", self.server_backoff_ms)?;

        Ok(())
    }

    fn check_attempts(name: &str, value: u32) -> ConfigErrorResult<()> {
        if !(MIN_MAX_ATTEMPTS..=MAX_MAX_ATTEMPTS).contains(&value) {
            return Err(ConfigError::remote_config(format!(
                "remote_config.{} must be {}-{}, got {}",
                name, MIN_MAX_ATTEMPTS, MAX_MAX_ATTEMPTS, value
            )));
        }
        Ok(())
    }

    fn check_backoff(name: &str, value: u64) -> ConfigErrorResult<()> {
        if value > MAX_BACKOFF_MS {
            return Err(ConfigError::remote_config(format!(
                "remote_config.{} must be 0-{}, got {}",
                name, MAX_BACKOFF_MS, value
            )));
        }
        Ok(())
    }
}
