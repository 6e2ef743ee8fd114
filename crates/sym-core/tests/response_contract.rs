//! JSON shape of the HTTP response types and entity serialization.

use chrono::Utc;
use pretty_assertions::assert_eq;
use serde_json::json;
use sym_core::analysis::analyze;
use sym_core::entities::{Condition, SymptomSession};
use sym_core::enums::{EmergencyLevel, Urgency};
use sym_core::responses::{HealthResponse, SymptomListResponse};

#[test]
fn analysis_response_field_names() {
    let value = serde_json::to_value(analyze(vec!["cough".into()])).unwrap();
    assert_eq!(
        value,
        json!({
            "symptoms": ["cough"],
            "possible_conditions": ["Common Cold", "Influenza", "COVID-19"],
            "confidence": 10
        })
    );
}

#[test]
fn health_and_symptom_list_shapes() {
    let health = serde_json::to_value(HealthResponse {
        status: "healthy".into(),
    })
    .unwrap();
    assert_eq!(health, json!({ "status": "healthy" }));

    let list = serde_json::to_value(SymptomListResponse {
        symptoms: vec!["fever".into(), "headache".into()],
    })
    .unwrap();
    assert_eq!(list, json!({ "symptoms": ["fever", "headache"] }));
}

#[test]
fn condition_serializes_emergency_level_as_snake_case() {
    let condition = Condition {
        id: 1,
        name: "Appendicitis".into(),
        category: Some("gi".into()),
        emergency_level: EmergencyLevel::Critical,
        description: None,
        external_id: None,
        created_at: Utc::now(),
    };
    let value = serde_json::to_value(&condition).unwrap();
    assert_eq!(value["emergency_level"], json!("critical"));

    let back: Condition = serde_json::from_value(value).unwrap();
    assert_eq!(back, condition);
}

#[test]
fn session_completion_flag() {
    let mut session = SymptomSession {
        id: 7,
        user_age: Some(34),
        user_gender: None,
        symptoms_input: vec!["fever".into()],
        predictions: json!(["Influenza"]),
        confidence: 10.0,
        urgency: Some(Urgency::Medium),
        created_at: Utc::now(),
        completed_at: None,
    };
    assert!(!session.is_completed());
    session.completed_at = Some(Utc::now());
    assert!(session.is_completed());
}
