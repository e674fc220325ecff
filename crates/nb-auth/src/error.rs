use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider asked to retry later {location}")]
    RateLimited { location: ErrorLocation },

    #[error("Email is already registered {location}")]
    EmailExists { location: ErrorLocation },

    #[error("No account for this email {location}")]
    EmailNotFound { location: ErrorLocation },

    #[error("Wrong password or malformed email {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("HTTP error calling identity provider: {source} {location}")]
    Http {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Identity provider returned {status} with code '{code}' {location}")]
    UnexpectedStatus {
        status: u16,
        code: String,
        location: ErrorLocation,
    },

    #[error("Failed to decode provider response: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl ProviderError {
    /// Map an Identity Toolkit error code onto a typed error. Codes may
    /// arrive with a trailing explanation ("TOO_MANY_ATTEMPTS_TRY_LATER :
    /// retry later"), so only the first word is matched.
    #[track_caller]
    pub(crate) fn from_error_code(status: u16, code: &str) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match code.split_whitespace().next().unwrap_or(code) {
            "TOO_MANY_ATTEMPTS_TRY_LATER" => Self::RateLimited { location },
            "EMAIL_EXISTS" => Self::EmailExists { location },
            "EMAIL_NOT_FOUND" => Self::EmailNotFound { location },
            "INVALID_PASSWORD" | "INVALID_EMAIL" | "INVALID_LOGIN_CREDENTIALS" => {
                Self::InvalidCredentials { location }
            }
            _ => Self::UnexpectedStatus {
                status,
                code: code.to_string(),
                location,
            },
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Http {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
