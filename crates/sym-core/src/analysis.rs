//! Stub symptom analysis.
//!
//! There is no inference engine: confidence grows linearly with the number of
//! reported symptoms and the suggested conditions are a fixed slice of
//! [`CORE_CONDITIONS`].

use crate::responses::AnalysisResponse;

/// Provider name logged for each analysis.
pub const ENGINE: &str = "builtin-stub";

/// Confidence added per reported symptom.
pub const CONFIDENCE_PER_SYMPTOM: u32 = 10;

/// Upper bound on the reported confidence.
pub const MAX_CONFIDENCE: u32 = 85;

/// Number of catalog conditions returned by an analysis.
pub const SUGGESTED_CONDITIONS: usize = 3;

/// Static condition catalog served by the analysis endpoint.
pub const CORE_CONDITIONS: &[&str] = &[
    "Common Cold",
    "Influenza",
    "COVID-19",
    "Migraine",
    "Gastroenteritis",
    "Allergic Rhinitis",
    "Strep Throat",
    "Urinary Tract Infection",
    "Tension Headache",
    "Bronchitis",
];

/// `min(10 * count, 85)`, saturating for absurdly large inputs.
#[must_use]
pub fn confidence_for(symptom_count: usize) -> u32 {
    u32::try_from(symptom_count)
        .unwrap_or(u32::MAX)
        .saturating_mul(CONFIDENCE_PER_SYMPTOM)
        .min(MAX_CONFIDENCE)
}

/// Build the analysis response for a list of reported symptoms.
#[must_use]
pub fn analyze(symptoms: Vec<String>) -> AnalysisResponse {
    let confidence = confidence_for(symptoms.len());
    AnalysisResponse {
        symptoms,
        possible_conditions: CORE_CONDITIONS
            .iter()
            .take(SUGGESTED_CONDITIONS)
            .map(|c| (*c).to_string())
            .collect(),
        confidence,
    }
}
