use crate::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Classification used by the config sync loop to pick a retry strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    /// The template was rejected as malformed (400-class).
    InvalidTemplate,
    /// Credentials missing, expired or lacking permission.
    Unauthorized,
    /// The concurrency token no longer matches the server's version.
    Conflict,
    /// Server-side or network failure that may succeed on a later attempt.
    Unavailable,
    /// Anything else.
    Other,
}

#[derive(Error, Debug)]
pub enum RemoteConfigError {
    #[error("Remote config template is invalid: {message} {location}")]
    InvalidTemplate {
        message: String,
        location: ErrorLocation,
    },

    #[error("Remote config access denied ({status}): {message} {location}")]
    Unauthorized {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Remote config version conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Remote config service unavailable ({status}): {message} {location}")]
    Unavailable {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Remote config request failed ({status}): {message} {location}")]
    Other {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Remote config transport failure: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    #[error("Remote config response could not be decoded: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl RemoteConfigError {
    /// Map an HTTP status and response message onto the error taxonomy.
    #[track_caller]
    pub fn from_status(status: u16, message: String) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match status {
            400 => RemoteConfigError::InvalidTemplate { message, location },
            401 | 403 => RemoteConfigError::Unauthorized {
                status,
                message,
                location,
            },
            409 | 412 => RemoteConfigError::Conflict { message, location },
            429 | 500..=599 => RemoteConfigError::Unavailable {
                status,
                message,
                location,
            },
            _ => RemoteConfigError::Other {
                status,
                message,
                location,
            },
        }
    }

    #[track_caller]
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        RemoteConfigError::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transport<S: Into<String>>(message: S) -> Self {
        RemoteConfigError::Transport {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode<S: Into<String>>(message: S) -> Self {
        RemoteConfigError::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> RemoteErrorKind {
        match self {
            Self::InvalidTemplate { .. } => RemoteErrorKind::InvalidTemplate,
            Self::Unauthorized { .. } => RemoteErrorKind::Unauthorized,
            Self::Conflict { .. } => RemoteErrorKind::Conflict,
            // Timeouts and dropped connections get the same budget as 5xx.
            Self::Unavailable { .. } | Self::Transport { .. } => RemoteErrorKind::Unavailable,
            Self::Other { .. } | Self::Decode { .. } => RemoteErrorKind::Other,
        }
    }
}
