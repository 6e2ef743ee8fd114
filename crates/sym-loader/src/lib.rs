//! # sym-loader
//!
//! Idempotent bulk loading of the symcheck knowledge base from CSV.
//!
//! Reads `conditions.csv`, `symptoms.csv`, `symptom_condition_mappings.csv`
//! and `medical_rules.csv`, inserting only rows whose natural key is not yet
//! present. Running the loader twice over the same files adds nothing the
//! second time.

pub mod error;
pub mod loader;
pub mod paths;
pub mod records;
pub mod report;

pub use error::LoadError;
pub use loader::{BulkLoader, LoadObserver, LoadStep, LoaderOptions};
pub use paths::LoaderPaths;
pub use report::{LoadOutcome, LoadReport, TableReport};
