use crate::{
    BroadcastConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, PushConfig, RemoteSyncConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub broadcast: BroadcastConfig,
    pub push: PushConfig,
    pub remote_config: RemoteSyncConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// 1. `AP_CONFIG_DIR`, else `./.ap/` (created if missing)
    /// 2. `config.toml` in that directory if present, else defaults
    /// 3. `AP_*` environment overrides
    ///
    /// Does not validate; call [`Config::validate`] afterwards.
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.broadcast.validate()?;
        self.push.validate()?;
        self.remote_config.validate()?;

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(self.database.resolve(&Self::config_dir()?))
    }

    /// Absolute log file path, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log a configuration summary. Access tokens are never printed.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}", self.bind_addr());
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  broadcast: batch={}, delay={}ms, record_batch={}, lookback={}d, scheduler={}s",
            self.broadcast.batch_size,
            self.broadcast.batch_delay_ms,
            self.broadcast.record_batch_size,
            self.broadcast.activity_lookback_days,
            self.broadcast.scheduler_interval_secs
        );
        info!(
            "  push: {} project={} token={} timeout={}s",
            self.push.base_url,
            self.push.project_id.as_deref().unwrap_or("<unset>"),
            if self.push.access_token.is_some() {
                "set"
            } else {
                "unset"
            },
            self.push.timeout_secs
        );
        if self.push.project_id.is_none() {
            warn!("  push.project_id is not set; push delivery will fail");
        }
        info!(
            "  remote_config: {} project={} conflict={}x{}ms server={}x{}ms",
            if self.remote_config.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.remote_config.project_id.as_deref().unwrap_or("<unset>"),
            self.remote_config.conflict_max_attempts,
            self.remote_config.conflict_backoff_ms,
            self.remote_config.server_max_attempts,
            self.remote_config.server_backoff_ms
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("AP_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("AP_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("AP_DATABASE_PATH", &mut self.database.path);

        // Logging
        Self::apply_env_parse("AP_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("AP_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("AP_LOG_FILE", &mut self.logging.file);

        // Broadcast
        Self::apply_env_parse("AP_BROADCAST_BATCH_SIZE", &mut self.broadcast.batch_size);
        Self::apply_env_parse(
            "AP_BROADCAST_BATCH_DELAY_MS",
            &mut self.broadcast.batch_delay_ms,
        );
        Self::apply_env_parse(
            "AP_BROADCAST_RECORD_BATCH_SIZE",
            &mut self.broadcast.record_batch_size,
        );
        Self::apply_env_parse(
            "AP_BROADCAST_ACTIVITY_LOOKBACK_DAYS",
            &mut self.broadcast.activity_lookback_days,
        );
        Self::apply_env_parse(
            "AP_BROADCAST_SCHEDULER_INTERVAL_SECS",
            &mut self.broadcast.scheduler_interval_secs,
        );

        // Push
        Self::apply_env_string("AP_PUSH_BASE_URL", &mut self.push.base_url);
        Self::apply_env_option_string("AP_PUSH_PROJECT_ID", &mut self.push.project_id);
        Self::apply_env_option_string("AP_PUSH_ACCESS_TOKEN", &mut self.push.access_token);
        Self::apply_env_parse("AP_PUSH_TIMEOUT_SECS", &mut self.push.timeout_secs);

        // Remote config
        Self::apply_env_bool("AP_REMOTE_CONFIG_ENABLED", &mut self.remote_config.enabled);
        Self::apply_env_string(
            "AP_REMOTE_CONFIG_BASE_URL",
            &mut self.remote_config.base_url,
        );
        Self::apply_env_option_string(
            "AP_REMOTE_CONFIG_PROJECT_ID",
            &mut self.remote_config.project_id,
        );
        Self::apply_env_option_string(
            "AP_REMOTE_CONFIG_ACCESS_TOKEN",
            &mut self.remote_config.access_token,
        );
        Self::apply_env_parse(
            "AP_REMOTE_CONFIG_TIMEOUT_SECS",
            &mut self.remote_config.timeout_secs,
        );
        Self::apply_env_parse(
            "AP_REMOTE_CONFIG_CONFLICT_MAX_ATTEMPTS",
            &mut self.remote_config.conflict_max_attempts,
        );
        Self::apply_env_parse(
            "AP_REMOTE_CONFIG_CONFLICT_BACKOFF_MS",
            &mut self.remote_config.conflict_backoff_ms,
        );
        Self::apply_env_parse(
            "AP_REMOTE_CONFIG_SERVER_MAX_ATTEMPTS",
            &mut self.remote_config.server_max_attempts,
        );
        Self::apply_env_parse(
            "AP_REMOTE_CONFIG_SERVER_BACKOFF_MS",
            &mut self.remote_config.server_backoff_ms,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false.
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored and the current value kept.
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
