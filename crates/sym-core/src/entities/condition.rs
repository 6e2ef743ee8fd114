use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::EmergencyLevel;

/// A medical condition that can be suggested by an analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Condition {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub emergency_level: EmergencyLevel,
    pub description: Option<String>,
    /// Identifier of the condition in an external symptom-checker service.
    pub external_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a condition; `id` and `created_at` are assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCondition {
    pub name: String,
    pub category: Option<String>,
    pub emergency_level: EmergencyLevel,
    pub description: Option<String>,
    pub external_id: Option<String>,
}
