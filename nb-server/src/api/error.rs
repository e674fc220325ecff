//! REST gateway error types
//!
//! Every gateway failure maps onto one of three flat `{"message": ...}`
//! bodies; store details stay in the log and off the wire.

use crate::MessageResponse;

use nb_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

/// Gateway errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or unknown api_key (401)
    #[error("Unauthorized api key {location}")]
    Unauthorized { location: ErrorLocation },

    /// Note absent or owned by someone else (404)
    #[error("Note not found {location}")]
    NotFound { location: ErrorLocation },

    /// Store failure (500)
    #[error("Store failure: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized() -> Self {
        ApiError::Unauthorized {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found() -> Self {
        ApiError::NotFound {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{self}");

        let (status, message) = match self {
            ApiError::Unauthorized { .. } => (StatusCode::UNAUTHORIZED, "Unauthorized api key"),
            ApiError::NotFound { .. } => (StatusCode::NOT_FOUND, "Note not found"),
            ApiError::Store { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "Store failure"),
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}

/// Convert database errors to gateway errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        ApiError::Store {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
