use gigbook_core::Result;
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};

/// Persistence context for one request.
///
/// Wraps a single transaction. All operations a handler performs share it;
/// `commit` makes them durable, and dropping an uncommitted session rolls
/// everything back.
pub struct Session {
    tx: Transaction<'static, Sqlite>,
}

impl Session {
    pub async fn begin(pool: &SqlitePool) -> Result<Self> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }

    /// Start a session that takes the write lock up front.
    ///
    /// A deferred transaction that reads before writing cannot wait for the
    /// lock once another writer holds it, so `SQLite` fails it with
    /// `SQLITE_BUSY` instead of honouring `busy_timeout`. Sessions that
    /// insert, update or delete use this.
    pub async fn begin_write(pool: &SqlitePool) -> Result<Self> {
        let tx = pool.begin_with("BEGIN IMMEDIATE").await?;
        Ok(Self { tx })
    }

    /// Borrow the underlying connection for a query
    pub fn connection(&mut self) -> &mut SqliteConnection {
        &mut *self.tx
    }

    pub async fn commit(self) -> Result<()> {
        self.tx.commit().await?;
        Ok(())
    }

    pub async fn rollback(self) -> Result<()> {
        self.tx.rollback().await?;
        Ok(())
    }
}
