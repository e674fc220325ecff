use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Object not found: {key} {location}")]
    NotFound {
        key: String,
        location: ErrorLocation,
    },

    #[error("HTTP error calling object storage: {source} {location}")]
    Http {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Object storage returned {status} for {key} {location}")]
    UnexpectedStatus {
        status: u16,
        key: String,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for StorageError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Http {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
