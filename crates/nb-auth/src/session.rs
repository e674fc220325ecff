use nb_core::User;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Cookie carrying the session token.
pub const SESSION_COOKIE: &str = "nb_session";

/// A logged-in browser session. Held in memory only, so a server restart
/// logs everyone out.
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque random token, also the cookie value.
    pub token: String,
    pub user_id: i64,
    pub email: String,
    /// Local part of the email, shown in the UI.
    pub display_name: String,
    /// Provider id token, forwarded as the bearer credential on storage calls.
    pub id_token: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub(crate) fn new(user: &User, id_token: &str, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            token: Uuid::new_v4().to_string(),
            user_id: user.id,
            email: user.email.clone(),
            display_name: user.display_name().to_string(),
            id_token: id_token.to_string(),
            created_at: now,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
