use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

pub type WsErrorResult<T> = Result<T, WsError>;

#[derive(Debug, Error)]
pub enum WsError {
    #[error("Failed to encode stats frame: {source} {location}")]
    Encode {
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl From<serde_json::Error> for WsError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        WsError::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
