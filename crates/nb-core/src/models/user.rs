//! User entity - a registered account mirrored from the identity provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A local user row. Credentials live at the identity provider; this record
/// only carries what the REST gateway and usage counter need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// Stored as entered at signup, matched case-insensitively.
    pub email: String,
    /// 32 lowercase hex chars, unique per user. Grants REST access.
    pub api_key: String,
    /// Lifetime count of authenticated REST requests.
    pub total_requests: i64,
    pub last_request_at: Option<DateTime<Utc>>,
}

impl User {
    /// Display name shown in the session: the local part of the email.
    pub fn display_name(&self) -> &str {
        display_name_of(&self.email)
    }
}

/// Derive a display name from an email address (everything before '@').
pub fn display_name_of(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
