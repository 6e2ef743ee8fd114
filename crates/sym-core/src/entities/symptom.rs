use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A symptom a user can report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Symptom {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub external_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a symptom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSymptom {
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub external_id: Option<String>,
}
