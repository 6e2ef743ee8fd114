//! Locations of the four input files.

use std::path::{Path, PathBuf};

pub const CONDITIONS_FILE: &str = "conditions.csv";
pub const SYMPTOMS_FILE: &str = "symptoms.csv";
pub const MAPPINGS_FILE: &str = "symptom_condition_mappings.csv";
pub const RULES_FILE: &str = "medical_rules.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderPaths {
    pub conditions: PathBuf,
    pub symptoms: PathBuf,
    pub mappings: PathBuf,
    pub rules: PathBuf,
}

impl LoaderPaths {
    /// Default file names inside `dir`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            conditions: dir.join(CONDITIONS_FILE),
            symptoms: dir.join(SYMPTOMS_FILE),
            mappings: dir.join(MAPPINGS_FILE),
            rules: dir.join(RULES_FILE),
        }
    }
}

impl Default for LoaderPaths {
    fn default() -> Self {
        Self::in_dir("data")
    }
}
