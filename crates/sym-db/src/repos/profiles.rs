//! Composite reads for the CLI listings.

use std::collections::HashMap;

use libsql::Connection;
use sym_core::responses::{ConditionProfile, MappedSymptom, SessionDetail};

use crate::error::DatabaseError;
use crate::repos::{api_calls, conditions, mappings, rules, sessions, symptoms};

/// Look up a condition by name and gather its mappings and rules.
///
/// Returns `Ok(None)` when no condition has that name.
///
/// # Errors
///
/// Returns `DatabaseError` if any of the underlying queries fail.
pub async fn condition_profile(
    conn: &Connection,
    name: &str,
) -> Result<Option<ConditionProfile>, DatabaseError> {
    let Some(id) = conditions::find_condition_id_by_name(conn, name).await? else {
        return Ok(None);
    };
    let condition = conditions::get_condition(conn, id).await?;

    let names: HashMap<i64, String> = symptoms::list_symptoms(conn)
        .await?
        .into_iter()
        .map(|s| (s.id, s.name))
        .collect();
    let mapped = mappings::mappings_for_condition(conn, id)
        .await?
        .into_iter()
        .map(|m| {
            names
                .get(&m.symptom_id)
                .map(|name| MappedSymptom {
                    name: name.clone(),
                    strength: m.strength,
                })
                .ok_or_else(|| {
                    DatabaseError::InvalidState(format!(
                        "mapping references missing symptom {}",
                        m.symptom_id
                    ))
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let rules = rules::rules_for_condition(conn, id).await?;
    Ok(Some(ConditionProfile {
        condition,
        symptoms: mapped,
        rules,
    }))
}

/// Fetch a session and its engine calls.
///
/// # Errors
///
/// Returns `DatabaseError::NoResult` for an unknown id.
pub async fn session_detail(conn: &Connection, id: i64) -> Result<SessionDetail, DatabaseError> {
    let session = sessions::get_session(conn, id).await?;
    let calls = api_calls::api_calls_for_session(conn, id).await?;
    Ok(SessionDetail { session, calls })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{seed_condition, seed_symptom, synced_db};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use sym_core::entities::{
        NewApiCall, NewMedicalRule, NewSymptomSession, SymptomConditionMapping,
    };
    use sym_core::enums::{EmergencyLevel, RuleType};

    #[tokio::test]
    async fn profile_names_mapped_symptoms_strongest_first() {
        let db = synced_db().await;
        let flu = seed_condition(&db, "Influenza", EmergencyLevel::Medium).await;
        let cough = seed_symptom(&db, "cough").await;
        let fever = seed_symptom(&db, "fever").await;
        for (symptom_id, strength) in [(cough, 0.6), (fever, 0.9)] {
            mappings::insert_mapping(
                db.conn(),
                &SymptomConditionMapping {
                    symptom_id,
                    condition_id: flu,
                    strength,
                },
            )
            .await
            .unwrap();
        }
        rules::insert_rule(
            db.conn(),
            &NewMedicalRule {
                condition_id: flu,
                rule_type: RuleType::Diagnostic,
                rule_name: "fever with cough".into(),
                rule_data: json!({"requires": ["fever", "cough"]}),
                confidence: 0.6,
            },
        )
        .await
        .unwrap();

        let profile = condition_profile(db.conn(), "Influenza")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(profile.condition.id, flu);
        let names: Vec<&str> = profile.symptoms.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["fever", "cough"]);
        assert_eq!(profile.rules.len(), 1);
        assert_eq!(profile.rules[0].rule_name, "fever with cough");
    }

    #[tokio::test]
    async fn unknown_condition_has_no_profile() {
        let db = synced_db().await;
        assert!(condition_profile(db.conn(), "Gout").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn session_detail_includes_its_calls() {
        let db = synced_db().await;
        let id = sessions::create_session(
            db.conn(),
            &NewSymptomSession {
                symptoms_input: vec!["cough".into()],
                confidence: 0.1,
                ..NewSymptomSession::default()
            },
        )
        .await
        .unwrap();
        api_calls::record_api_call(
            db.conn(),
            &NewApiCall {
                session_id: id,
                provider: "builtin-stub".into(),
                endpoint: "/analyze".into(),
                response_time_ms: Some(0),
                cost: None,
            },
        )
        .await
        .unwrap();

        let detail = session_detail(db.conn(), id).await.unwrap();
        assert_eq!(detail.session.symptoms_input, vec!["cough"]);
        assert_eq!(detail.calls.len(), 1);
        assert!(matches!(
            session_detail(db.conn(), id + 1).await,
            Err(DatabaseError::NoResult)
        ));
    }
}
