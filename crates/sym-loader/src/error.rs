use std::path::PathBuf;

use sym_db::error::DatabaseError;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} is missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{table} row {row}: {reason}")]
    InvalidRow {
        table: &'static str,
        row: usize,
        reason: String,
    },

    #[error("medical_rules row {row} ('{rule_name}'): rule_data is not valid JSON: {source}")]
    InvalidRuleData {
        row: usize,
        rule_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("database error while loading {table}: {source}")]
    Database {
        table: &'static str,
        #[source]
        source: DatabaseError,
    },
}

impl LoadError {
    /// Table the error belongs to, when it can be attributed to one.
    #[must_use]
    pub const fn table(&self) -> Option<&'static str> {
        match self {
            Self::InvalidRow { table, .. } | Self::Database { table, .. } => Some(table),
            Self::InvalidRuleData { .. } => Some("medical_rules"),
            Self::Read { .. } | Self::MissingColumn { .. } => None,
        }
    }

    pub(crate) fn db(table: &'static str) -> impl Fn(DatabaseError) -> Self {
        move |source| Self::Database { table, source }
    }
}
