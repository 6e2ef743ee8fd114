//! Row counts for the four load targets.

use libsql::Connection;
use serde::Serialize;

use crate::SymDb;
use crate::error::DatabaseError;

/// Row counts of the tables the bulk loader writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub conditions: u64,
    pub symptoms: u64,
    pub mappings: u64,
    pub rules: u64,
}

impl TableCounts {
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.conditions + self.symptoms + self.mappings + self.rules
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

async fn count_rows(conn: &Connection, table: &str) -> Result<u64, DatabaseError> {
    let mut rows = conn
        .query(&format!("SELECT COUNT(*) FROM {table}"), ())
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    let n = row.get::<i64>(0)?;
    u64::try_from(n).map_err(|_| DatabaseError::InvalidState(format!("{table} count {n}")))
}

/// Count rows in conditions, symptoms, mappings and rules.
///
/// # Errors
///
/// Returns `DatabaseError` if any table is missing or the query fails.
pub async fn table_counts(conn: &Connection) -> Result<TableCounts, DatabaseError> {
    Ok(TableCounts {
        conditions: count_rows(conn, "conditions").await?,
        symptoms: count_rows(conn, "symptoms").await?,
        mappings: count_rows(conn, "symptom_condition_mappings").await?,
        rules: count_rows(conn, "medical_rules").await?,
    })
}

impl SymDb {
    /// Row counts on the shared connection.
    ///
    /// # Errors
    ///
    /// See [`table_counts`].
    pub async fn table_counts(&self) -> Result<TableCounts, DatabaseError> {
        table_counts(self.conn()).await
    }

    /// Symptom names in ascending order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_symptom_names(&self) -> Result<Vec<String>, DatabaseError> {
        super::symptoms::list_symptom_names(self.conn()).await
    }
}
