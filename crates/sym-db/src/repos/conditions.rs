//! Condition repository.

use libsql::Connection;
use sym_core::entities::{Condition, NewCondition};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_tag};

const SELECT_COLUMNS: &str =
    "SELECT id, name, category, emergency_level, description, external_id, created_at FROM conditions";

fn row_to_condition(row: &libsql::Row) -> Result<Condition, DatabaseError> {
    Ok(Condition {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        category: get_opt_string(row, 2)?,
        emergency_level: parse_tag(&row.get::<String>(3)?)?,
        description: get_opt_string(row, 4)?,
        external_id: get_opt_string(row, 5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

/// Look up a condition id by its exact name.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails.
pub async fn find_condition_id_by_name(
    conn: &Connection,
    name: &str,
) -> Result<Option<i64>, DatabaseError> {
    let mut rows = conn
        .query("SELECT id FROM conditions WHERE name = ?1", libsql::params![name])
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row.get::<i64>(0)?)),
        None => Ok(None),
    }
}

/// Insert a condition and return its new id.
///
/// # Errors
///
/// Returns `DatabaseError` if the INSERT fails (e.g. duplicate name).
pub async fn insert_condition(
    conn: &Connection,
    condition: &NewCondition,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO conditions (name, category, emergency_level, description, external_id)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        libsql::params![
            condition.name.as_str(),
            condition.category.as_deref(),
            condition.emergency_level.as_str(),
            condition.description.as_deref(),
            condition.external_id.as_deref()
        ],
    )
    .await?;
    Ok(conn.last_insert_rowid())
}

/// Fetch one condition by id.
///
/// # Errors
///
/// Returns `DatabaseError::NoResult` if no row has that id.
pub async fn get_condition(conn: &Connection, id: i64) -> Result<Condition, DatabaseError> {
    let mut rows = conn
        .query(&format!("{SELECT_COLUMNS} WHERE id = ?1"), libsql::params![id])
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    row_to_condition(&row)
}

/// All conditions ordered by name.
///
/// # Errors
///
/// Returns `DatabaseError` if the query or row parsing fails.
pub async fn list_conditions(conn: &Connection) -> Result<Vec<Condition>, DatabaseError> {
    let mut rows = conn
        .query(&format!("{SELECT_COLUMNS} ORDER BY name"), ())
        .await?;
    let mut conditions = Vec::new();
    while let Some(row) = rows.next().await? {
        conditions.push(row_to_condition(&row)?);
    }
    Ok(conditions)
}
