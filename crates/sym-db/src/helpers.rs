//! Column conversions shared by the repos.
//!
//! Timestamps arrive in two shapes: column defaults written by `datetime('now')`
//! and values written from Rust with `to_rfc3339()`. Both parse to `DateTime<Utc>`.

use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<DateTime<Utc>>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_datetime(s: Option<&str>) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_datetime(s)?)),
        _ => Ok(None),
    }
}

/// Parse a TEXT tag column (emergency level, rule type, urgency).
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` if the stored value is not a known tag.
pub fn parse_tag<T>(s: &str) -> Result<T, DatabaseError>
where
    T: FromStr<Err = sym_core::errors::CoreError>,
{
    s.parse::<T>()
        .map_err(|e| DatabaseError::InvalidState(e.to_string()))
}

/// Nullable TEXT column; SQL NULL and `""` both read as `None`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Parse a JSON TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the column holds invalid JSON.
pub fn parse_json<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_str(s).map_err(|e| DatabaseError::Query(format!("Invalid JSON in column: {e}")))
}

/// Serialize a value for a JSON TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Other` if serialization fails.
pub fn to_json_text<T: serde::Serialize>(value: &T) -> Result<String, DatabaseError> {
    serde_json::to_string(value).map_err(|e| DatabaseError::Other(e.into()))
}

/// Convert a non-negative INTEGER column into `u32`.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` for negative or oversized values.
pub fn to_u32(column: &str, value: i64) -> Result<u32, DatabaseError> {
    u32::try_from(value)
        .map_err(|_| DatabaseError::InvalidState(format!("{column} out of range: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use sym_core::enums::EmergencyLevel;

    #[rstest]
    #[case("2026-02-09 14:30:00")]
    #[case("2026-02-09T14:30:00+00:00")]
    #[case("2026-02-09T16:30:00+02:00")]
    fn parses_sqlite_and_rfc3339_datetimes(#[case] raw: &str) {
        let expected = parse_datetime("2026-02-09T14:30:00Z").unwrap();
        assert_eq!(parse_datetime(raw).unwrap(), expected);
    }

    #[test]
    fn rejects_garbage_datetime() {
        assert!(parse_datetime("yesterday").is_err());
        assert!(parse_optional_datetime(Some("")).unwrap().is_none());
        assert!(parse_optional_datetime(None).unwrap().is_none());
    }

    #[test]
    fn tag_parse_maps_to_invalid_state() {
        assert_eq!(parse_tag::<EmergencyLevel>("high").unwrap(), EmergencyLevel::High);
        assert!(matches!(
            parse_tag::<EmergencyLevel>("urgent"),
            Err(DatabaseError::InvalidState(_))
        ));
    }

    #[test]
    fn u32_conversion_rejects_negative() {
        assert_eq!(to_u32("user_age", 42).unwrap(), 42);
        assert!(to_u32("user_age", -1).is_err());
    }
}
