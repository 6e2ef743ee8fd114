use serde::{Deserialize, Serialize};

/// Weighted association between a symptom and a condition.
///
/// Identity is the `(symptom_id, condition_id)` pair; `strength` is in `[0, 1]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SymptomConditionMapping {
    pub symptom_id: i64,
    pub condition_id: i64,
    pub strength: f64,
}

impl SymptomConditionMapping {
    /// Strength used when a mapping is stored without an explicit weight.
    pub const DEFAULT_STRENGTH: f64 = 0.5;
}
