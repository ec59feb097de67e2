use ap_core::RemoteConfigError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Final result of a failed sync, after any retries.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Remote config rejected the template: {source} {location}")]
    Validation {
        source: RemoteConfigError,
        location: ErrorLocation,
    },

    #[error("Remote config credentials rejected: {source} {location}")]
    Auth {
        source: RemoteConfigError,
        location: ErrorLocation,
    },

    #[error("Remote config still conflicting after {attempts} attempts: {source} {location}")]
    Conflict {
        attempts: u32,
        source: RemoteConfigError,
        location: ErrorLocation,
    },

    #[error("Remote config unavailable after {attempts} attempts: {source} {location}")]
    Server {
        attempts: u32,
        source: RemoteConfigError,
        location: ErrorLocation,
    },

    #[error("Remote config sync failed: {source} {location}")]
    Remote {
        source: RemoteConfigError,
        location: ErrorLocation,
    },
}

impl SyncError {
    #[track_caller]
    pub fn validation(source: RemoteConfigError) -> Self {
        Self::Validation {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn auth(source: RemoteConfigError) -> Self {
        Self::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict(attempts: u32, source: RemoteConfigError) -> Self {
        Self::Conflict {
            attempts,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn server(attempts: u32, source: RemoteConfigError) -> Self {
        Self::Server {
            attempts,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn remote(source: RemoteConfigError) -> Self {
        Self::Remote {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether the failure went through the retry path before surfacing.
    pub fn was_retried(&self) -> bool {
        matches!(
            self,
            Self::Conflict { attempts, .. } | Self::Server { attempts, .. } if *attempts > 1
        )
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
