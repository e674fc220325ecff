//! Note entity - a short text record owned by exactly one user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub text: String,
    /// Server-assigned creation time. Notes list oldest-first by this field.
    pub date_added: DateTime<Utc>,
}
