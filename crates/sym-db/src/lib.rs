//! # sym-db
//!
//! libSQL database access for symcheck.
//!
//! Holds the canonical schema as plain table definitions, the schema
//! synchronizer that creates missing tables without touching existing ones,
//! and keyed repositories for every entity. Repository functions take a
//! `&libsql::Connection` so they run equally against the shared connection or
//! inside a transaction (which derefs to one).
//!
//! There is no process-wide handle: a [`SymDb`] is opened at the process
//! boundary and passed by reference to whatever needs it.

pub mod error;
pub mod helpers;
pub mod repos;
pub mod schema;
pub mod sync;

mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Database handle threaded through every operation.
///
/// Wraps a libSQL database and its single connection. Dropping the handle
/// releases both.
pub struct SymDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    path: String,
}

impl SymDb {
    /// Open a local database file (or `":memory:"`).
    ///
    /// Does not create any tables; run [`SymDb::sync_schema`] for that.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or the
    /// connection cannot be configured.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Query(format!("PRAGMA foreign_keys: {e}")))?;

        tracing::debug!(path, "opened database");
        Ok(Self {
            db,
            conn,
            path: path.to_string(),
        })
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Location the handle was opened with.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Round-trip a trivial query to prove the database is reachable.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or yields no row.
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        let mut rows = self.conn.query("SELECT 1", ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let one = row.get::<i64>(0)?;
        if one != 1 {
            return Err(DatabaseError::InvalidState(format!(
                "SELECT 1 returned {one}"
            )));
        }
        Ok(())
    }

    /// Release the connection and database.
    pub fn close(self) {
        tracing::debug!(path = %self.path, "closing database");
        drop(self);
    }
}
