use crate::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// A push gateway call that failed as a whole.
///
/// Per-token rejections are not errors; they come back inside
/// [`crate::MulticastResponse`].
#[derive(Error, Debug)]
pub enum PushGatewayError {
    #[error("Push gateway transport failure: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    #[error("Push gateway rejected the request with status {status}: {message} {location}")]
    Rejected {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Push gateway is not configured: {message} {location}")]
    NotConfigured {
        message: String,
        location: ErrorLocation,
    },

    #[error("Push payload could not be encoded: {message} {location}")]
    Encode {
        message: String,
        location: ErrorLocation,
    },
}

impl PushGatewayError {
    #[track_caller]
    pub fn not_configured<S: Into<String>>(message: S) -> Self {
        PushGatewayError::NotConfigured {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transport<S: Into<String>>(message: S) -> Self {
        PushGatewayError::Transport {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
