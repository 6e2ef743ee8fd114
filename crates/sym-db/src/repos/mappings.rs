//! Symptom-condition mapping repository.

use libsql::Connection;
use sym_core::entities::SymptomConditionMapping;

use crate::error::DatabaseError;

/// Whether the `(symptom_id, condition_id)` pair is already mapped.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails.
pub async fn mapping_exists(
    conn: &Connection,
    symptom_id: i64,
    condition_id: i64,
) -> Result<bool, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT 1 FROM symptom_condition_mappings WHERE symptom_id = ?1 AND condition_id = ?2",
            libsql::params![symptom_id, condition_id],
        )
        .await?;
    Ok(rows.next().await?.is_some())
}

/// Insert one mapping.
///
/// # Errors
///
/// Returns `DatabaseError` if the INSERT fails (duplicate pair, dangling id,
/// or strength outside `[0, 1]`).
pub async fn insert_mapping(
    conn: &Connection,
    mapping: &SymptomConditionMapping,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO symptom_condition_mappings (symptom_id, condition_id, strength)
         VALUES (?1, ?2, ?3)",
        libsql::params![mapping.symptom_id, mapping.condition_id, mapping.strength],
    )
    .await?;
    Ok(())
}

/// Mappings for one condition, strongest first.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails.
pub async fn mappings_for_condition(
    conn: &Connection,
    condition_id: i64,
) -> Result<Vec<SymptomConditionMapping>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT symptom_id, condition_id, strength FROM symptom_condition_mappings
             WHERE condition_id = ?1 ORDER BY strength DESC, symptom_id",
            libsql::params![condition_id],
        )
        .await?;
    let mut mappings = Vec::new();
    while let Some(row) = rows.next().await? {
        mappings.push(SymptomConditionMapping {
            symptom_id: row.get::<i64>(0)?,
            condition_id: row.get::<i64>(1)?,
            strength: row.get::<f64>(2)?,
        });
    }
    Ok(mappings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{seed_condition, seed_symptom, synced_db};
    use sym_core::enums::EmergencyLevel;

    #[tokio::test]
    async fn insert_then_exists() {
        let db = synced_db().await;
        let s = seed_symptom(&db, "fever").await;
        let c = seed_condition(&db, "Influenza", EmergencyLevel::Medium).await;

        assert!(!mapping_exists(db.conn(), s, c).await.unwrap());
        insert_mapping(
            db.conn(),
            &SymptomConditionMapping {
                symptom_id: s,
                condition_id: c,
                strength: 0.8,
            },
        )
        .await
        .unwrap();
        assert!(mapping_exists(db.conn(), s, c).await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_pair_and_bad_strength_are_rejected() {
        let db = synced_db().await;
        let s = seed_symptom(&db, "cough").await;
        let c = seed_condition(&db, "Common Cold", EmergencyLevel::Low).await;
        let mapping = SymptomConditionMapping {
            symptom_id: s,
            condition_id: c,
            strength: 0.4,
        };
        insert_mapping(db.conn(), &mapping).await.unwrap();
        assert!(insert_mapping(db.conn(), &mapping).await.is_err());

        let c2 = seed_condition(&db, "Pneumonia", EmergencyLevel::High).await;
        let out_of_range = SymptomConditionMapping {
            symptom_id: s,
            condition_id: c2,
            strength: 1.5,
        };
        assert!(insert_mapping(db.conn(), &out_of_range).await.is_err());
    }

    #[tokio::test]
    async fn mappings_sorted_by_strength() {
        let db = synced_db().await;
        let c = seed_condition(&db, "Influenza", EmergencyLevel::Medium).await;
        let weak = seed_symptom(&db, "sneezing").await;
        let strong = seed_symptom(&db, "fever").await;
        for (symptom_id, strength) in [(weak, 0.2), (strong, 0.9)] {
            insert_mapping(
                db.conn(),
                &SymptomConditionMapping {
                    symptom_id,
                    condition_id: c,
                    strength,
                },
            )
            .await
            .unwrap();
        }
        let got = mappings_for_condition(db.conn(), c).await.unwrap();
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].symptom_id, strong);
    }
}
