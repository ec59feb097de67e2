use ap_core::{CoreError, StoreError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum BroadcastError {
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Store error: {source}")]
    Store {
        #[from]
        source: StoreError,
    },

    #[error("Broadcast not found: {id} {location}")]
    NotFound { id: Uuid, location: ErrorLocation },

    #[error("Broadcast {id} cannot be sent while {status} {location}")]
    InvalidState {
        id: Uuid,
        status: String,
        location: ErrorLocation,
    },
}

impl BroadcastError {
    #[track_caller]
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_state(id: Uuid, status: impl ToString) -> Self {
        Self::InvalidState {
            id,
            status: status.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for BroadcastError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let field = e.field().map(String::from);
        let message = match &e {
            CoreError::Validation { message, .. } => message.clone(),
            CoreError::InvalidAudience { message, .. } => message.clone(),
            CoreError::InvalidCategory { value, .. } => {
                format!("unknown category '{}'", value)
            }
            CoreError::InvalidStatus { value, .. } => format!("unknown status '{}'", value),
            CoreError::InvalidStatusTransition { from, to, .. } => {
                format!("cannot move from {} to {}", from, to)
            }
        };
        Self::Validation {
            message,
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, BroadcastError>;
