use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::RuleType;

/// A named decision rule owned by exactly one condition.
///
/// `rule_data` is an opaque JSON payload interpreted by consumers outside this
/// workspace. `(condition_id, rule_name)` is unique by convention of the loader.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicalRule {
    pub id: i64,
    pub condition_id: i64,
    pub rule_type: RuleType,
    pub rule_name: String,
    pub rule_data: serde_json::Value,
    pub confidence: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMedicalRule {
    pub condition_id: i64,
    pub rule_type: RuleType,
    pub rule_name: String,
    pub rule_data: serde_json::Value,
    pub confidence: f64,
}

impl MedicalRule {
    pub const DEFAULT_CONFIDENCE: f64 = 0.5;
}
