use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::Urgency;

/// One logged analysis request.
///
/// Once `completed_at` is set the row is immutable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymptomSession {
    pub id: i64,
    pub user_age: Option<u32>,
    pub user_gender: Option<String>,
    pub symptoms_input: Vec<String>,
    pub predictions: serde_json::Value,
    pub confidence: f64,
    pub urgency: Option<Urgency>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl SymptomSession {
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewSymptomSession {
    pub user_age: Option<u32>,
    pub user_gender: Option<String>,
    pub symptoms_input: Vec<String>,
    pub predictions: serde_json::Value,
    pub confidence: f64,
    pub urgency: Option<Urgency>,
}
