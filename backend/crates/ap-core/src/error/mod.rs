pub mod push_gateway_error;
pub mod remote_config_error;
pub mod store_error;

// -------------------------------------------------------------------------- //

use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid broadcast category: {value} {location}")]
    InvalidCategory {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid broadcast status: {value} {location}")]
    InvalidStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid target audience: {message} {location}")]
    InvalidAudience {
        message: String,
        location: ErrorLocation,
    },

    #[error("Broadcast status cannot move from {from} to {to} {location}")]
    InvalidStatusTransition {
        from: String,
        to: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_audience<S: Into<String>>(message: S) -> Self {
        CoreError::InvalidAudience {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Field the error refers to, when the failure is tied to request input.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            Self::InvalidCategory { .. } => Some("category"),
            Self::InvalidAudience { .. } => Some("targetAudience"),
            Self::InvalidStatus { .. } | Self::InvalidStatusTransition { .. } => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
