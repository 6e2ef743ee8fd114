//! Symptom repository.

use libsql::Connection;
use sym_core::entities::{NewSymptom, Symptom};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime};

fn row_to_symptom(row: &libsql::Row) -> Result<Symptom, DatabaseError> {
    Ok(Symptom {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        category: get_opt_string(row, 2)?,
        description: get_opt_string(row, 3)?,
        external_id: get_opt_string(row, 4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

/// Look up a symptom id by its exact name.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails.
pub async fn find_symptom_id_by_name(
    conn: &Connection,
    name: &str,
) -> Result<Option<i64>, DatabaseError> {
    let mut rows = conn
        .query("SELECT id FROM symptoms WHERE name = ?1", libsql::params![name])
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row.get::<i64>(0)?)),
        None => Ok(None),
    }
}

/// Insert a symptom and return its new id.
///
/// # Errors
///
/// Returns `DatabaseError` if the INSERT fails.
pub async fn insert_symptom(conn: &Connection, symptom: &NewSymptom) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO symptoms (name, category, description, external_id) VALUES (?1, ?2, ?3, ?4)",
        libsql::params![
            symptom.name.as_str(),
            symptom.category.as_deref(),
            symptom.description.as_deref(),
            symptom.external_id.as_deref()
        ],
    )
    .await?;
    Ok(conn.last_insert_rowid())
}

/// Symptom names in ascending order. Backs `GET /symptoms`.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails.
pub async fn list_symptom_names(conn: &Connection) -> Result<Vec<String>, DatabaseError> {
    let mut rows = conn
        .query("SELECT name FROM symptoms ORDER BY name", ())
        .await?;
    let mut names = Vec::new();
    while let Some(row) = rows.next().await? {
        names.push(row.get::<String>(0)?);
    }
    Ok(names)
}

/// All symptoms ordered by name.
///
/// # Errors
///
/// Returns `DatabaseError` if the query or row parsing fails.
pub async fn list_symptoms(conn: &Connection) -> Result<Vec<Symptom>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT id, name, category, description, external_id, created_at
             FROM symptoms ORDER BY name",
            (),
        )
        .await?;
    let mut symptoms = Vec::new();
    while let Some(row) = rows.next().await? {
        symptoms.push(row_to_symptom(&row)?);
    }
    Ok(symptoms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{seed_symptom, synced_db};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn names_come_back_sorted() {
        let db = synced_db().await;
        seed_symptom(&db, "headache").await;
        seed_symptom(&db, "cough").await;
        seed_symptom(&db, "fever").await;
        assert_eq!(
            list_symptom_names(db.conn()).await.unwrap(),
            vec!["cough", "fever", "headache"]
        );
    }

    #[tokio::test]
    async fn empty_table_lists_nothing() {
        let db = synced_db().await;
        assert!(list_symptom_names(db.conn()).await.unwrap().is_empty());
        assert!(list_symptoms(db.conn()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_optional_columns_read_as_none() {
        let db = synced_db().await;
        let id = insert_symptom(
            db.conn(),
            &NewSymptom {
                name: "nausea".into(),
                category: Some(String::new()),
                description: None,
                external_id: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(
            find_symptom_id_by_name(db.conn(), "nausea").await.unwrap(),
            Some(id)
        );
        let all = list_symptoms(db.conn()).await.unwrap();
        assert_eq!(all[0].category, None);
    }
}
