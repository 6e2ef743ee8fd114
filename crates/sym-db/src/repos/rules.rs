//! Medical rule repository.
//!
//! A rule is keyed by `(condition_id, rule_name)`. The table has no unique
//! index on that pair; callers check with [`find_rule_id`] before inserting.

use libsql::Connection;
use sym_core::entities::{MedicalRule, NewMedicalRule};

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_json, parse_tag, to_json_text};

fn row_to_rule(row: &libsql::Row) -> Result<MedicalRule, DatabaseError> {
    Ok(MedicalRule {
        id: row.get::<i64>(0)?,
        condition_id: row.get::<i64>(1)?,
        rule_type: parse_tag(&row.get::<String>(2)?)?,
        rule_name: row.get::<String>(3)?,
        rule_data: parse_json(&row.get::<String>(4)?)?,
        confidence: row.get::<f64>(5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

/// Id of the rule with this name under this condition, if any.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails.
pub async fn find_rule_id(
    conn: &Connection,
    condition_id: i64,
    rule_name: &str,
) -> Result<Option<i64>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT id FROM medical_rules WHERE condition_id = ?1 AND rule_name = ?2",
            libsql::params![condition_id, rule_name],
        )
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row.get::<i64>(0)?)),
        None => Ok(None),
    }
}

/// Insert a rule and return its new id. `rule_data` is stored as JSON text.
///
/// # Errors
///
/// Returns `DatabaseError` if serialization or the INSERT fails.
pub async fn insert_rule(conn: &Connection, rule: &NewMedicalRule) -> Result<i64, DatabaseError> {
    let rule_data = to_json_text(&rule.rule_data)?;
    conn.execute(
        "INSERT INTO medical_rules (condition_id, rule_type, rule_name, rule_data, confidence)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        libsql::params![
            rule.condition_id,
            rule.rule_type.as_str(),
            rule.rule_name.as_str(),
            rule_data,
            rule.confidence
        ],
    )
    .await?;
    Ok(conn.last_insert_rowid())
}

/// Rules attached to one condition, in insertion order.
///
/// # Errors
///
/// Returns `DatabaseError` if the query or row parsing fails.
pub async fn rules_for_condition(
    conn: &Connection,
    condition_id: i64,
) -> Result<Vec<MedicalRule>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT id, condition_id, rule_type, rule_name, rule_data, confidence, created_at
             FROM medical_rules WHERE condition_id = ?1 ORDER BY id",
            libsql::params![condition_id],
        )
        .await?;
    let mut rules = Vec::new();
    while let Some(row) = rows.next().await? {
        rules.push(row_to_rule(&row)?);
    }
    Ok(rules)
}
