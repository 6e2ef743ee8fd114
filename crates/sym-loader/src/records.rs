//! CSV row shapes and the reader that produces them.
//!
//! Every field is read as text. Numeric and tag columns are parsed by the
//! loader so a bad value is reported against its table and row number.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::LoadError;

/// A CSV row type with a fixed set of required headers.
pub trait CsvRecord: DeserializeOwned {
    const COLUMNS: &'static [&'static str];
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionRecord {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub emergency_level: String,
    #[serde(default)]
    pub description: String,
}

impl CsvRecord for ConditionRecord {
    const COLUMNS: &'static [&'static str] = &["name", "category", "emergency_level", "description"];
}

#[derive(Debug, Clone, Deserialize)]
pub struct SymptomRecord {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl CsvRecord for SymptomRecord {
    const COLUMNS: &'static [&'static str] = &["name", "category", "description"];
}

#[derive(Debug, Clone, Deserialize)]
pub struct MappingRecord {
    pub symptom_name: String,
    pub condition_name: String,
    #[serde(default)]
    pub strength: String,
}

impl CsvRecord for MappingRecord {
    const COLUMNS: &'static [&'static str] = &["symptom_name", "condition_name", "strength"];
}

#[derive(Debug, Clone, Deserialize)]
pub struct RuleRecord {
    pub condition_name: String,
    pub rule_type: String,
    pub rule_name: String,
    pub rule_data: String,
    #[serde(default)]
    pub confidence: String,
}

impl CsvRecord for RuleRecord {
    const COLUMNS: &'static [&'static str] =
        &["condition_name", "rule_type", "rule_name", "rule_data", "confidence"];
}

/// Read every row of `path`.
///
/// Values are trimmed and columns beyond the required ones are ignored.
///
/// # Errors
///
/// `LoadError::MissingColumn` if a required header is absent,
/// `LoadError::Read` for I/O or malformed CSV.
pub fn read_records<R: CsvRecord>(path: &Path) -> Result<Vec<R>, LoadError> {
    let read_err = |source: csv::Error| LoadError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|e| read_err(e.into()))?;
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(file);

    let headers = reader.headers().map_err(read_err)?.clone();
    for &column in R::COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    reader
        .deserialize::<R>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_err)
}

/// `None` for a blank cell.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn csv_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn trims_values_and_ignores_extra_columns() {
        let file = csv_file(
            "name, category ,emergency_level,description,source\n\
             Influenza , respiratory,medium, Seasonal flu ,cdc\n",
        );
        let rows: Vec<ConditionRecord> = read_records(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Influenza");
        assert_eq!(rows[0].category, "respiratory");
        assert_eq!(rows[0].description, "Seasonal flu");
    }

    #[test]
    fn missing_required_column_is_named() {
        let file = csv_file("symptom_name,condition_name\nfever,Influenza\n");
        let err = read_records::<MappingRecord>(file.path()).unwrap_err();
        assert!(
            matches!(err, LoadError::MissingColumn { column: "strength", .. }),
            "{err}"
        );
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = read_records::<SymptomRecord>(Path::new("/nonexistent/symptoms.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn quoted_json_payload_is_preserved() {
        let file = csv_file(
            "condition_name,rule_type,rule_name,rule_data,confidence\n\
             Influenza,diagnostic,fever rule,\"{\"\"min_temp\"\": 38.0}\",0.7\n",
        );
        let rows: Vec<RuleRecord> = read_records(file.path()).unwrap();
        assert_eq!(rows[0].rule_data, r#"{"min_temp": 38.0}"#);
    }

    #[test]
    fn blank_cells_become_none() {
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("x"), Some("x".to_string()));
    }
}
