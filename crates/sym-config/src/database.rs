//! Database location.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "symptom_checker.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the local libSQL database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the database lives only for the lifetime of the process.
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}
