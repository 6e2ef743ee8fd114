use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audit record of one analysis engine invocation made on behalf of a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiCall {
    pub id: i64,
    pub session_id: i64,
    pub provider: String,
    pub endpoint: String,
    pub response_time_ms: Option<u32>,
    pub cost: Option<f64>,
    pub called_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewApiCall {
    pub session_id: i64,
    pub provider: String,
    pub endpoint: String,
    pub response_time_ms: Option<u32>,
    pub cost: Option<f64>,
}
