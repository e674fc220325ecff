//! Authentication state of a browser session.

use serde::{Deserialize, Serialize};

/// Where a visitor stands with the identity provider.
///
/// Transitions: `Anonymous` becomes `PendingVerification` after signup or a
/// login with an unverified email, `Authenticated` after a verified login,
/// and back to `Anonymous` on logout or session expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuthState {
    /// No session. Only login, signup and password reset are available.
    #[default]
    Anonymous,
    /// Account exists but the email is not verified yet. No session is issued.
    PendingVerification,
    /// Verified login with a live session.
    Authenticated,
}

impl AuthState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::PendingVerification => "pending_verification",
            Self::Authenticated => "authenticated",
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

impl std::fmt::Display for AuthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
