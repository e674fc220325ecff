pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::note_repository::NoteRepository;
pub use repositories::user_repository::UserRepository;

/// Embedded migrations, shared by the server binary and the test pools.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Run all pending migrations on the given pool.
pub async fn run_migrations(pool: &sqlx::SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}
