#![allow(dead_code)]

use nb_core::User;

use sqlx::SqlitePool;

/// Inserts a user row directly, bypassing the repository under test
pub async fn create_test_user(pool: &SqlitePool, email: &str, api_key: &str) -> User {
    let result = sqlx::query("INSERT INTO users (email, api_key, total_requests) VALUES (?, ?, 0)")
        .bind(email)
        .bind(api_key)
        .execute(pool)
        .await
        .expect("Failed to create test user");

    User {
        id: result.last_insert_rowid(),
        email: email.to_string(),
        api_key: api_key.to_string(),
        total_requests: 0,
        last_request_at: None,
    }
}

/// Inserts a note row with an explicit date_added (unix seconds)
pub async fn create_test_note(
    pool: &SqlitePool,
    user_id: i64,
    title: &str,
    text: &str,
    date_added: i64,
) -> i64 {
    let result =
        sqlx::query("INSERT INTO notes (user_id, title, text, date_added) VALUES (?, ?, ?, ?)")
            .bind(user_id)
            .bind(title)
            .bind(text)
            .bind(date_added)
            .execute(pool)
            .await
            .expect("Failed to create test note");

    result.last_insert_rowid()
}
