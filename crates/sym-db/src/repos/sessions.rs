//! Symptom session repository.
//!
//! Sessions are append-only. The one mutation is [`complete_session`], which
//! stamps `completed_at` once and never again.

use chrono::Utc;
use libsql::Connection;
use sym_core::entities::{NewSymptomSession, SymptomSession};
use sym_core::enums::Urgency;

use crate::error::DatabaseError;
use crate::helpers::{
    get_opt_string, parse_datetime, parse_json, parse_optional_datetime, parse_tag, to_json_text,
    to_u32,
};

const SELECT_COLUMNS: &str = "SELECT id, user_age, user_gender, symptoms_input, predictions, \
     confidence, urgency, created_at, completed_at FROM symptom_sessions";

fn row_to_session(row: &libsql::Row) -> Result<SymptomSession, DatabaseError> {
    let user_age = row
        .get::<Option<i64>>(1)?
        .map(|age| to_u32("user_age", age))
        .transpose()?;
    let urgency = get_opt_string(row, 6)?
        .map(|u| parse_tag(&u))
        .transpose()?;
    Ok(SymptomSession {
        id: row.get::<i64>(0)?,
        user_age,
        user_gender: get_opt_string(row, 2)?,
        symptoms_input: parse_json(&row.get::<String>(3)?)?,
        predictions: parse_json(&row.get::<String>(4)?)?,
        confidence: row.get::<f64>(5)?,
        urgency,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        completed_at: parse_optional_datetime(get_opt_string(row, 8)?.as_deref())?,
    })
}

/// Record a new session and return its id.
///
/// # Errors
///
/// Returns `DatabaseError` if serialization or the INSERT fails.
pub async fn create_session(
    conn: &Connection,
    session: &NewSymptomSession,
) -> Result<i64, DatabaseError> {
    let symptoms_input = to_json_text(&session.symptoms_input)?;
    let predictions = to_json_text(&session.predictions)?;
    conn.execute(
        "INSERT INTO symptom_sessions
             (user_age, user_gender, symptoms_input, predictions, confidence, urgency, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        libsql::params![
            session.user_age,
            session.user_gender.as_deref(),
            symptoms_input,
            predictions,
            session.confidence,
            session.urgency.map(Urgency::as_str),
            Utc::now().to_rfc3339()
        ],
    )
    .await?;
    Ok(conn.last_insert_rowid())
}

/// Stamp `completed_at` if the session is still open.
///
/// Returns `false` when the session was already completed or does not exist.
///
/// # Errors
///
/// Returns `DatabaseError` if the UPDATE fails.
pub async fn complete_session(conn: &Connection, id: i64) -> Result<bool, DatabaseError> {
    let changed = conn
        .execute(
            "UPDATE symptom_sessions SET completed_at = ?1 WHERE id = ?2 AND completed_at IS NULL",
            libsql::params![Utc::now().to_rfc3339(), id],
        )
        .await?;
    Ok(changed > 0)
}

/// Fetch one session by id.
///
/// # Errors
///
/// Returns `DatabaseError::NoResult` if no row has that id.
pub async fn get_session(conn: &Connection, id: i64) -> Result<SymptomSession, DatabaseError> {
    let mut rows = conn
        .query(&format!("{SELECT_COLUMNS} WHERE id = ?1"), libsql::params![id])
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    row_to_session(&row)
}

/// Most recent sessions first.
///
/// # Errors
///
/// Returns `DatabaseError` if the query or row parsing fails.
pub async fn list_recent_sessions(
    conn: &Connection,
    limit: u32,
) -> Result<Vec<SymptomSession>, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC LIMIT ?1"),
            libsql::params![limit],
        )
        .await?;
    let mut sessions = Vec::new();
    while let Some(row) = rows.next().await? {
        sessions.push(row_to_session(&row)?);
    }
    Ok(sessions)
}
