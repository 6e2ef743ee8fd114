//! Schema synchronizer.
//!
//! Compares the live database against [`schema::SCHEMA`] and creates the
//! tables that are absent. Existing tables are never dropped or altered.

use std::collections::HashSet;

use serde::Serialize;

use crate::SymDb;
use crate::error::DatabaseError;
use crate::schema::{self, TableDef};

/// Presence of one expected table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableStatus {
    pub name: &'static str,
    pub exists: bool,
}

/// Result of inspecting the expected tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaReport {
    pub tables: Vec<TableStatus>,
    /// True when every expected table exists.
    pub ready: bool,
}

impl SchemaReport {
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        self.tables
            .iter()
            .filter(|t| !t.exists)
            .map(|t| t.name)
            .collect()
    }
}

/// Result of a synchronization pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncOutcome {
    /// State of the expected tables before anything was created.
    pub report: SchemaReport,
    /// Tables created by this pass, in creation order.
    pub created: Vec<&'static str>,
}

impl SymDb {
    /// Names of all user tables currently in the database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if `sqlite_master` cannot be read.
    pub async fn existing_tables(&self) -> Result<HashSet<String>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
                (),
            )
            .await?;
        let mut names = HashSet::new();
        while let Some(row) = rows.next().await? {
            names.insert(row.get::<String>(0)?);
        }
        Ok(names)
    }

    /// Report, for each expected table, whether it already exists.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the catalog query fails.
    pub async fn inspect_schema(&self) -> Result<SchemaReport, DatabaseError> {
        let existing = self.existing_tables().await?;
        let tables: Vec<TableStatus> = schema::EXPECTED_TABLES
            .iter()
            .map(|&name| {
                let exists = existing.contains(name);
                if exists {
                    tracing::info!(table = name, "table already exists");
                } else {
                    tracing::info!(table = name, "table missing");
                }
                TableStatus { name, exists }
            })
            .collect();
        let ready = tables.iter().all(|t| t.exists);
        Ok(SchemaReport { tables, ready })
    }

    /// Create every schema table that does not exist yet.
    ///
    /// `report.ready` reflects only the expected tables; the session tables
    /// are still created when they alone are absent. A failure to create a
    /// table aborts the pass immediately; tables created before the failure
    /// stay in place.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Schema` naming the table that could not be created.
    pub async fn sync_schema(&self) -> Result<SyncOutcome, DatabaseError> {
        let report = self.inspect_schema().await?;
        let existing = self.existing_tables().await?;
        let absent: Vec<&TableDef> = schema::SCHEMA
            .iter()
            .filter(|def| !existing.contains(def.name))
            .collect();
        if absent.is_empty() {
            tracing::info!("all tables already exist, no action needed");
            return Ok(SyncOutcome {
                report,
                created: Vec::new(),
            });
        }

        let names: Vec<&str> = absent.iter().map(|def| def.name).collect();
        tracing::info!(missing = ?report.missing(), creating = ?names, "creating missing tables");
        let mut created = Vec::with_capacity(absent.len());
        for def in absent {
            self.create_table(def).await?;
            created.push(def.name);
        }

        tracing::info!(created = ?created, "tables created");
        Ok(SyncOutcome { report, created })
    }

    async fn create_table(&self, def: &TableDef) -> Result<(), DatabaseError> {
        let schema_err = |e: libsql::Error| DatabaseError::Schema {
            table: def.name.to_string(),
            reason: e.to_string(),
        };
        self.conn()
            .execute(def.create_sql, ())
            .await
            .map_err(schema_err)?;
        for index in def.indexes {
            self.conn().execute(index, ()).await.map_err(schema_err)?;
        }
        Ok(())
    }
}
