//! Route handlers. Each one is stateless apart from the shared [`AppState`].

use std::time::{Duration, Instant};

use axum::Json;
use axum::extract::State;
use sym_core::analysis;
use sym_core::entities::{NewApiCall, NewSymptomSession};
use sym_core::responses::{AnalysisResponse, HealthResponse, RootResponse, SymptomListResponse};
use sym_db::error::DatabaseError;
use sym_db::repos::{api_calls, sessions};

use crate::error::ApiError;
use crate::state::AppState;

pub const ROOT_MESSAGE: &str = "AI Symptom Checker API is running!";

/// `GET /`
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}

/// `GET /health` answers without touching the database.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// `GET /symptoms` lists known symptom names, alphabetically.
pub async fn symptoms(State(state): State<AppState>) -> Result<Json<SymptomListResponse>, ApiError> {
    let symptoms = state.db.list_symptom_names().await?;
    Ok(Json(SymptomListResponse { symptoms }))
}

/// `POST /analyze` with a JSON array of symptom strings.
///
/// The analysis is a fixed stub; when session recording is on, the request
/// is also stored as a completed session together with one `api_calls` row
/// for the engine invocation. Recording failures never fail the request.
pub async fn analyze(
    State(state): State<AppState>,
    Json(symptoms): Json<Vec<String>>,
) -> Json<AnalysisResponse> {
    let started = Instant::now();
    let response = analysis::analyze(symptoms);
    let elapsed = started.elapsed();
    if state.record_sessions {
        match record_session(&state, &response, elapsed).await {
            Ok(id) => tracing::debug!(session_id = id, "analysis recorded"),
            Err(e) => tracing::warn!(error = %e, "failed to record analysis session"),
        }
    }
    Json(response)
}

async fn record_session(
    state: &AppState,
    response: &AnalysisResponse,
    elapsed: Duration,
) -> Result<i64, DatabaseError> {
    let conn = state.db.conn();
    let id = sessions::create_session(
        conn,
        &NewSymptomSession {
            symptoms_input: response.symptoms.clone(),
            predictions: serde_json::json!(response.possible_conditions),
            confidence: f64::from(response.confidence) / 100.0,
            ..NewSymptomSession::default()
        },
    )
    .await?;
    api_calls::record_api_call(
        conn,
        &NewApiCall {
            session_id: id,
            provider: analysis::ENGINE.to_string(),
            endpoint: "/analyze".to_string(),
            response_time_ms: Some(u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX)),
            cost: None,
        },
    )
    .await?;
    sessions::complete_session(conn, id).await?;
    Ok(id)
}
