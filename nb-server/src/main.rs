pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod web;

#[cfg(test)]
mod tests;

pub use api::{
    error::{ApiError, Result as ApiResult},
    extractors::api_user::ApiUser,
    message_response::MessageResponse,
    notes::{
        create_note_request::CreateNoteRequest,
        note_dto::NoteDto,
        note_list_response::NoteListResponse,
        notes::{create_note, delete_note, get_note, list_notes, update_note},
        update_note_request::UpdateNoteRequest,
    },
};

pub use web::{
    auth::{
        AuthStatusResponse, ForgotPasswordRequest, IndexResponse, LoginRequest, LoginResponse,
        SignupRequest,
    },
    error::{Result as WebResult, WebError},
    notes::NoteForm,
    session::{MaybeSession, SessionUser},
    settings::SettingsResponse,
};

pub use crate::routes::build_router;

use nb_auth::{IdentityProvider, SessionStore};
use nb_storage::ObjectStorage;
use nb_ws::{AppState, ShutdownCoordinator, StatsBroadcaster};

use std::error::Error;
use std::time::Duration;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Pick up .env before reading configuration
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = nb_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = nb_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting nb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5))
                .foreign_keys(true),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    nb_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    // Create shutdown coordinator
    let shutdown = ShutdownCoordinator::new();

    // Build application state
    let app_state = AppState {
        pool,
        sessions: SessionStore::new(config.session.ttl_secs),
        provider: IdentityProvider::new(&config.provider.base_url, &config.provider.api_key),
        storage: ObjectStorage::new(&config.storage.base_url, &config.storage.bucket),
        stats: StatsBroadcaster::new(
            Duration::from_secs(config.stats.interval_secs),
            config.stats.channel_capacity,
        ),
        shutdown: shutdown.clone(),
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {actual_addr}");

    // Spawn signal handler for graceful shutdown. The coordinator also
    // stops the stats sampler.
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {e}");
            }
        }
    });

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.subscribe().wait().await;
            info!("Graceful shutdown complete");
        })
        .await?;

    Ok(())
}
