//! Gigbook Storage
//!
//! `SQLite` persistence layer for venues, artists, and the shows linking them.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: each entity owns its own queries and commands
//! - **Explicit Sessions**: every operation runs on a [`Session`] handed in by
//!   the caller; one session is one transaction
//! - **Guaranteed Release**: a session that is not committed rolls back when
//!   dropped, on every exit path
//!
//! # Example
//!
//! ```rust,no_run
//! use gigbook_storage::{venues, Database};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::open("sqlite://gigbook.db", 5).await?;
//!
//! let mut session = db.begin().await?;
//! let hits = venues::search(&mut session, "hop").await?;
//! println!("{} venues", hits.count);
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod session;

// Vertical slices
pub mod artists;
pub mod shows;
pub mod venues;

// Sample data
pub mod seed;

pub use context::Database;
pub use error::StorageError;
pub use session::Session;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://gigbook.db>`)
/// * `max_connections` - upper bound on pooled connections
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating pool with URL: {}", database_url);

    // Parse the URL into options so we can configure SQLite behavior
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    tracing::debug!("Pool created");

    Ok(pool)
}

/// Timestamps are stored as unix seconds so SQL ordering is chronological.
pub(crate) fn timestamp_from_db(secs: i64) -> gigbook_core::Result<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| gigbook_core::GigError::storage("Invalid timestamp"))
}

pub(crate) fn genres_from_db(raw: &str) -> gigbook_core::Result<Vec<String>> {
    Ok(serde_json::from_str(raw)?)
}

pub(crate) fn genres_to_db(genres: &[String]) -> gigbook_core::Result<String> {
    Ok(serde_json::to_string(genres)?)
}
