use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ap_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] ap_db::DbError),

    #[error("Push gateway setup failed: {0}")]
    PushGateway(#[from] ap_core::PushGatewayError),

    #[error("Remote config setup failed: {0}")]
    RemoteConfig(#[from] ap_core::RemoteConfigError),

    #[error("Failed to install metrics recorder: {message}")]
    Metrics { message: String },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
