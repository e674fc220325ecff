#![allow(dead_code)]

//! Test infrastructure for nb-server route tests

use nb_auth::{IdentityProvider, SessionStore};
use nb_core::{Note, User};
use nb_db::{NoteRepository, UserRepository};
use nb_storage::ObjectStorage;
use nb_ws::{AppState, ShutdownCoordinator, StatsBroadcaster};

use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Bearer credential baked into every test session.
pub const TEST_ID_TOKEN: &str = "test-id-token";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    // In-memory databases need a single shared connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    nb_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// AppState whose provider and storage point at unroutable endpoints.
/// Tests that exercise those clients pass a wiremock uri instead.
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with("http://127.0.0.1:9", "http://127.0.0.1:9").await
}

pub async fn create_test_app_state_with(provider_url: &str, storage_url: &str) -> AppState {
    let pool = create_test_pool().await;

    AppState {
        pool,
        sessions: SessionStore::new(3600),
        provider: IdentityProvider::new(provider_url, "test-api-key"),
        storage: ObjectStorage::new(storage_url, "test-bucket"),
        stats: StatsBroadcaster::new(Duration::from_millis(50), 16),
        shutdown: ShutdownCoordinator::new(),
    }
}

/// Create a test user
pub async fn create_test_user(pool: &SqlitePool, email: &str, api_key: &str) -> User {
    UserRepository::new(pool.clone())
        .create(email, api_key)
        .await
        .expect("Failed to create test user")
}

/// Create a test note
pub async fn create_test_note(pool: &SqlitePool, user_id: i64, title: &str, text: &str) -> Note {
    NoteRepository::new(pool.clone())
        .create(user_id, title, text)
        .await
        .expect("Failed to create test note")
}

/// Overwrite a user's usage counter directly
pub async fn set_total_requests(pool: &SqlitePool, user_id: i64, total: i64) {
    sqlx::query("UPDATE users SET total_requests = ? WHERE id = ?")
        .bind(total)
        .bind(user_id)
        .execute(pool)
        .await
        .expect("Failed to set total_requests");
}

/// Open a session for the user and return the Cookie header value.
pub async fn session_cookie_for(state: &AppState, user: &User) -> String {
    let session = state.sessions.create(user, TEST_ID_TOKEN).await;

    format!("nb_session={}", session.token)
}
