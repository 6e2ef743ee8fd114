//! Response bodies returned by the `sym-api` router and the read-only CLI
//! listings.
//!
//! Field names are part of the public JSON contract.

use serde::{Deserialize, Serialize};

use crate::entities::{ApiCall, Condition, MedicalRule, SymptomSession};

/// Response from `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RootResponse {
    pub message: String,
}

/// Response from `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

/// Response from `GET /symptoms`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymptomListResponse {
    pub symptoms: Vec<String>,
}

/// Response from `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResponse {
    pub symptoms: Vec<String>,
    pub possible_conditions: Vec<String>,
    pub confidence: u32,
}

/// Body returned alongside non-2xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

/// A symptom linked to a condition, with the mapping weight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MappedSymptom {
    pub name: String,
    pub strength: f64,
}

/// A condition together with its mapped symptoms (strongest first) and rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionProfile {
    pub condition: Condition,
    pub symptoms: Vec<MappedSymptom>,
    pub rules: Vec<MedicalRule>,
}

/// A session with the engine calls logged for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionDetail {
    pub session: SymptomSession,
    pub calls: Vec<ApiCall>,
}
