use crate::{error::StorageError, Session};
use gigbook_core::Result;
use sqlx::SqlitePool;

/// Shared handle to the `SQLite` pool. Cheap to clone.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect and bring the schema up to date
    ///
    /// # Errors
    /// Returns an error if the connection fails or migrations fail
    pub async fn open(
        database_url: &str,
        max_connections: u32,
    ) -> std::result::Result<Self, StorageError> {
        let pool = crate::create_pool(database_url, max_connections).await?;
        crate::run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Start a per-request session
    pub async fn begin(&self) -> Result<Session> {
        Session::begin(&self.pool).await
    }

    /// Start a per-request session that will write
    pub async fn begin_write(&self) -> Result<Session> {
        Session::begin_write(&self.pool).await
    }

    /// Round-trip a trivial query to check the pool can reach the database
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
