//! User repository - account rows and the request usage counter.

use crate::{DbError, Result as DbErrorResult};

use nb_core::User;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    api_key: String,
    total_requests: i64,
    last_request_at: Option<i64>,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: UserRow) -> DbErrorResult<User> {
        let last_request_at = row
            .last_request_at
            .map(|ts| {
                DateTime::from_timestamp(ts, 0).ok_or_else(|| DbError::RowDecode {
                    message: format!("Invalid timestamp in users.last_request_at: {ts}"),
                    location: ErrorLocation::from(Location::caller()),
                })
            })
            .transpose()?;

        Ok(User {
            id: row.id,
            email: row.email,
            api_key: row.api_key,
            total_requests: row.total_requests,
            last_request_at,
        })
    }
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user. Fails on duplicate email or api_key.
    pub async fn create(&self, email: &str, api_key: &str) -> DbErrorResult<User> {
        let result =
            sqlx::query("INSERT INTO users (email, api_key, total_requests) VALUES (?, ?, 0)")
                .bind(email)
                .bind(api_key)
                .execute(&self.pool)
                .await?;

        Ok(User {
            id: result.last_insert_rowid(),
            email: email.to_string(),
            api_key: api_key.to_string(),
            total_requests: 0,
            last_request_at: None,
        })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, api_key, total_requests, last_request_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    /// Email matching is case-insensitive (column is COLLATE NOCASE).
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, api_key, total_requests, last_request_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    pub async fn find_by_api_key(&self, api_key: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, api_key, total_requests, last_request_at FROM users WHERE api_key = ?",
        )
        .bind(api_key)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    /// Bump the usage counter and stamp the request time.
    pub async fn record_request(&self, id: i64, at: DateTime<Utc>) -> DbErrorResult<()> {
        let ts = at.timestamp();

        sqlx::query(
            "UPDATE users SET total_requests = total_requests + 1, last_request_at = ? WHERE id = ?",
        )
        .bind(ts)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Total REST requests across all users. Feeds the stats broadcast.
    pub async fn sum_total_requests(&self) -> DbErrorResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(total_requests), 0) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}
