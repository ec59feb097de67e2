use crate::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Failure reported by a persistent-store implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store backend error: {message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },

    #[error("Record not found: {entity} {id} {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },

    #[error("Stored document could not be decoded: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn backend<S: Into<String>>(message: S) -> Self {
        StoreError::Backend {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(entity: &'static str, id: S) -> Self {
        StoreError::NotFound {
            entity,
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
