//! Session-route error types
//!
//! Each variant maps to a status code and one of the Polish flash
//! strings; provider and store details are logged, never sent to the
//! browser.

use crate::MessageResponse;
use crate::web::messages;

use nb_auth::ProviderError;
use nb_db::DbError;
use nb_storage::StorageError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    /// Missing, unknown, or expired session cookie (401)
    #[error("Not logged in {location}")]
    NotLoggedIn { location: ErrorLocation },

    /// Signup with password2 != password (400)
    #[error("Passwords do not match {location}")]
    PasswordsDoNotMatch { location: ErrorLocation },

    /// Identity provider refused or failed (status by category)
    #[error("Provider call failed: {source} {location}")]
    Provider {
        source: ProviderError,
        location: ErrorLocation,
    },

    /// Store failure (500)
    #[error("Store failure: {source} {location}")]
    Store {
        source: DbError,
        location: ErrorLocation,
    },

    /// Object storage refused or failed
    #[error("Storage call failed: {source} {location}")]
    Storage {
        source: StorageError,
        location: ErrorLocation,
    },

    /// Note absent or owned by someone else (404)
    #[error("Note not found {location}")]
    NoteNotFound { location: ErrorLocation },

    /// Unusable multipart body (400)
    #[error("Bad upload: {message} {location}")]
    BadUpload {
        message: String,
        location: ErrorLocation,
    },
}

impl WebError {
    #[track_caller]
    pub fn not_logged_in() -> Self {
        WebError::NotLoggedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn passwords_do_not_match() -> Self {
        WebError::PasswordsDoNotMatch {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn note_not_found() -> Self {
        WebError::NoteNotFound {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_upload(message: impl Into<String>) -> Self {
        WebError::BadUpload {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{self}");

        let (status, message) = match &self {
            WebError::NotLoggedIn { .. } => (StatusCode::UNAUTHORIZED, messages::LOGIN_REQUIRED),
            WebError::PasswordsDoNotMatch { .. } => {
                (StatusCode::BAD_REQUEST, messages::PASSWORDS_DO_NOT_MATCH)
            }
            WebError::Provider { source, .. } => match source {
                ProviderError::RateLimited { .. } => {
                    (StatusCode::TOO_MANY_REQUESTS, messages::TOO_MANY_ATTEMPTS)
                }
                ProviderError::EmailExists { .. } => (StatusCode::CONFLICT, messages::EMAIL_TAKEN),
                ProviderError::EmailNotFound { .. } => {
                    (StatusCode::NOT_FOUND, messages::EMAIL_NOT_FOUND)
                }
                ProviderError::InvalidCredentials { .. } => {
                    (StatusCode::UNAUTHORIZED, messages::BAD_CREDENTIALS)
                }
                _ => (StatusCode::BAD_GATEWAY, messages::GENERIC_ERROR),
            },
            WebError::Store { .. } => (StatusCode::INTERNAL_SERVER_ERROR, messages::GENERIC_ERROR),
            WebError::Storage { source, .. } => match source {
                StorageError::NotFound { .. } => (StatusCode::NOT_FOUND, messages::GENERIC_ERROR),
                _ => (StatusCode::BAD_GATEWAY, messages::GENERIC_ERROR),
            },
            WebError::NoteNotFound { .. } => (StatusCode::NOT_FOUND, messages::NOTE_NOT_FOUND),
            WebError::BadUpload { .. } => (StatusCode::BAD_REQUEST, messages::GENERIC_ERROR),
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}

impl From<ProviderError> for WebError {
    #[track_caller]
    fn from(source: ProviderError) -> Self {
        WebError::Provider {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for WebError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        WebError::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StorageError> for WebError {
    #[track_caller]
    fn from(source: StorageError) -> Self {
        WebError::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, WebError>;
