//! Note repository - CRUD over notes, always scoped to the owning user.
//!
//! Every lookup, update and delete carries a `user_id` guard in its WHERE
//! clause. A note id belonging to another user behaves exactly like a note
//! that does not exist, so handlers cannot leak foreign rows by mistake.

use crate::{DbError, Result as DbErrorResult};

use nb_core::Note;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct NoteRow {
    id: i64,
    user_id: i64,
    title: String,
    text: String,
    date_added: i64,
}

impl TryFrom<NoteRow> for Note {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: NoteRow) -> DbErrorResult<Note> {
        let date_added =
            DateTime::from_timestamp(row.date_added, 0).ok_or_else(|| DbError::RowDecode {
                message: format!("Invalid timestamp in notes.date_added: {}", row.date_added),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Note {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            text: row.text,
            date_added,
        })
    }
}

pub struct NoteRepository {
    pool: SqlitePool,
}

impl NoteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a note for the given user with a server-assigned creation time.
    /// Timestamps are stored at whole-second precision.
    pub async fn create(&self, user_id: i64, title: &str, text: &str) -> DbErrorResult<Note> {
        let ts = Utc::now().timestamp();

        let result =
            sqlx::query("INSERT INTO notes (user_id, title, text, date_added) VALUES (?, ?, ?, ?)")
                .bind(user_id)
                .bind(title)
                .bind(text)
                .bind(ts)
                .execute(&self.pool)
                .await?;

        let date_added =
            DateTime::from_timestamp(ts, 0).ok_or_else(|| DbError::RowDecode {
                message: format!("Invalid timestamp in notes.date_added: {ts}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Note {
            id: result.last_insert_rowid(),
            user_id,
            title: title.to_string(),
            text: text.to_string(),
            date_added,
        })
    }

    pub async fn find_for_user(&self, id: i64, user_id: i64) -> DbErrorResult<Option<Note>> {
        let row = sqlx::query_as::<_, NoteRow>(
            "SELECT id, user_id, title, text, date_added FROM notes WHERE id = ? AND user_id = ?",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Note::try_from).transpose()
    }

    /// All notes of one user, oldest first. Ties on date_added keep insert order.
    pub async fn list_for_user(&self, user_id: i64) -> DbErrorResult<Vec<Note>> {
        let rows = sqlx::query_as::<_, NoteRow>(
            "SELECT id, user_id, title, text, date_added FROM notes WHERE user_id = ? ORDER BY date_added, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Note::try_from).collect()
    }

    /// Update title and text of an owned note. Returns None when the note
    /// does not exist or belongs to someone else.
    pub async fn update_for_user(
        &self,
        id: i64,
        user_id: i64,
        title: &str,
        text: &str,
    ) -> DbErrorResult<Option<Note>> {
        let result = sqlx::query("UPDATE notes SET title = ?, text = ? WHERE id = ? AND user_id = ?")
            .bind(title)
            .bind(text)
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_for_user(id, user_id).await
    }

    /// Delete an owned note. Returns false when nothing matched.
    pub async fn delete_for_user(&self, id: i64, user_id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
