use serde::Serialize;
use sym_db::repos::TableCounts;

/// Outcome for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableReport {
    pub table: &'static str,
    /// Data rows read from the file.
    pub rows: usize,
    pub added: usize,
    /// Rows whose natural key was already present.
    pub skipped: usize,
    /// Rows referencing a symptom or condition that does not exist.
    pub unresolved: usize,
}

impl TableReport {
    #[must_use]
    pub const fn new(table: &'static str, rows: usize) -> Self {
        Self {
            table,
            rows,
            added: 0,
            skipped: 0,
            unresolved: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub before: TableCounts,
    pub after: TableCounts,
    pub tables: Vec<TableReport>,
}

impl LoadReport {
    #[must_use]
    pub fn total_added(&self) -> usize {
        self.tables.iter().map(|t| t.added).sum()
    }

    #[must_use]
    pub fn table(&self, name: &str) -> Option<&TableReport> {
        self.tables.iter().find(|t| t.table == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadOutcome {
    /// Existing data was found and loading into a non-empty database was not allowed.
    Declined { existing: TableCounts },
    Completed(LoadReport),
}
