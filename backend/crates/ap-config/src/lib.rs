mod broadcast_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod push_config;
mod remote_sync_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use broadcast_config::BroadcastConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use push_config::PushConfig;
pub use remote_sync_config::RemoteSyncConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "AP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".ap";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "data.db";

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_PUSH_BASE_URL: &str = "https://fcm.googleapis.com";
const DEFAULT_REMOTE_CONFIG_BASE_URL: &str = "https://firebaseremoteconfig.googleapis.com";
