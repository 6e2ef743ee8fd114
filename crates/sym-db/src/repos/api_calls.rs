//! Engine call log, one row per analysis engine invocation made for a session.

use libsql::Connection;
use sym_core::entities::{ApiCall, NewApiCall};

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, to_u32};

/// Append a call record and return its id.
///
/// # Errors
///
/// Returns `DatabaseError` if the INSERT fails (e.g. unknown session).
pub async fn record_api_call(conn: &Connection, call: &NewApiCall) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO api_calls (session_id, provider, endpoint, response_time_ms, cost)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        libsql::params![
            call.session_id,
            call.provider.as_str(),
            call.endpoint.as_str(),
            call.response_time_ms,
            call.cost
        ],
    )
    .await?;
    Ok(conn.last_insert_rowid())
}

/// Calls made for one session, oldest first.
///
/// # Errors
///
/// Returns `DatabaseError` if the query or row parsing fails.
pub async fn api_calls_for_session(
    conn: &Connection,
    session_id: i64,
) -> Result<Vec<ApiCall>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT id, session_id, provider, endpoint, response_time_ms, cost, called_at
             FROM api_calls WHERE session_id = ?1 ORDER BY id",
            libsql::params![session_id],
        )
        .await?;
    let mut calls = Vec::new();
    while let Some(row) = rows.next().await? {
        calls.push(ApiCall {
            id: row.get::<i64>(0)?,
            session_id: row.get::<i64>(1)?,
            provider: row.get::<String>(2)?,
            endpoint: row.get::<String>(3)?,
            response_time_ms: row
                .get::<Option<i64>>(4)?
                .map(|ms| to_u32("response_time_ms", ms))
                .transpose()?,
            cost: row.get::<Option<f64>>(5)?,
            called_at: parse_datetime(&row.get::<String>(6)?)?,
        });
    }
    Ok(calls)
}
