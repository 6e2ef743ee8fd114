//! The bulk loader.
//!
//! Tables load strictly in order, each inside its own transaction. Natural
//! keys are looked up through the transaction, so a key repeated within one
//! file is inserted once and counted as skipped afterwards.

use libsql::Connection;
use sym_core::entities::{
    MedicalRule, NewCondition, NewMedicalRule, NewSymptom, SymptomConditionMapping,
    check_unit_interval,
};
use sym_core::enums::{EmergencyLevel, RuleType};
use sym_db::SymDb;
use sym_db::error::DatabaseError;
use sym_db::repos::{TableCounts, conditions, mappings, rules, symptoms};

use crate::error::LoadError;
use crate::paths::LoaderPaths;
use crate::records::{
    ConditionRecord, CsvRecord, MappingRecord, RuleRecord, SymptomRecord, non_empty, read_records,
};
use crate::report::{LoadOutcome, LoadReport, TableReport};

const COUNTS: &str = "row counts";

#[derive(Debug, Clone, Copy, Default)]
pub struct LoaderOptions {
    /// Load even when the target tables already hold rows.
    pub allow_nonempty: bool,
}

/// Result of the pre-load check on existing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Preflight {
    /// Carries the counts to report as "before".
    Proceed(TableCounts),
    /// Carries the counts that caused the load to be declined.
    Declined(TableCounts),
}

/// One table-sized unit of work, in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStep {
    Conditions,
    Symptoms,
    Mappings,
    Rules,
}

impl LoadStep {
    pub const ALL: [Self; 4] = [Self::Conditions, Self::Symptoms, Self::Mappings, Self::Rules];

    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Conditions => "conditions",
            Self::Symptoms => "symptoms",
            Self::Mappings => "symptom_condition_mappings",
            Self::Rules => "medical_rules",
        }
    }
}

/// Hooks called around each step of [`BulkLoader::run`].
pub trait LoadObserver {
    fn step_started(&mut self, _step: LoadStep) {}

    /// Called once per attempted step, before the error (if any) is returned.
    fn step_finished(&mut self, _step: LoadStep, _result: Result<&TableReport, &LoadError>) {}
}

impl LoadObserver for () {}

pub struct BulkLoader<'a> {
    db: &'a SymDb,
    options: LoaderOptions,
}

impl<'a> BulkLoader<'a> {
    #[must_use]
    pub const fn new(db: &'a SymDb, options: LoaderOptions) -> Self {
        Self { db, options }
    }

    /// Run every step and return the before/after report.
    ///
    /// `observer` sees each step start and finish; pass `&mut ()` to ignore them.
    ///
    /// # Errors
    ///
    /// Returns the first `LoadError`. Tables committed before the failing one
    /// keep their rows; later tables are not attempted.
    pub async fn run(
        &self,
        paths: &LoaderPaths,
        observer: &mut impl LoadObserver,
    ) -> Result<LoadOutcome, LoadError> {
        let before = match self.preflight().await? {
            Preflight::Proceed(before) => before,
            Preflight::Declined(existing) => return Ok(LoadOutcome::Declined { existing }),
        };

        let mut tables = Vec::with_capacity(LoadStep::ALL.len());
        for step in LoadStep::ALL {
            observer.step_started(step);
            let result = self.load_step(step, paths).await;
            observer.step_finished(step, result.as_ref());
            tables.push(result?);
        }

        self.finish(before, tables).await.map(LoadOutcome::Completed)
    }

    /// Read the current counts and decide whether loading may proceed.
    async fn preflight(&self) -> Result<Preflight, LoadError> {
        let counts = self
            .db
            .table_counts()
            .await
            .map_err(LoadError::db(COUNTS))?;
        tracing::info!(
            conditions = counts.conditions,
            symptoms = counts.symptoms,
            mappings = counts.mappings,
            rules = counts.rules,
            "current database state"
        );

        if counts.is_empty() {
            tracing::info!("database is empty, proceeding with load");
            return Ok(Preflight::Proceed(counts));
        }
        if !self.options.allow_nonempty {
            tracing::info!(
                existing = counts.total(),
                "database already holds data and loading into it is not allowed, existing data preserved"
            );
            return Ok(Preflight::Declined(counts));
        }
        tracing::info!(
            existing = counts.total(),
            "database already holds data, loading new rows only"
        );
        Ok(Preflight::Proceed(counts))
    }

    /// Load one table inside its own transaction.
    async fn load_step(
        &self,
        step: LoadStep,
        paths: &LoaderPaths,
    ) -> Result<TableReport, LoadError> {
        let table = step.table();
        tracing::info!(table, "loading");
        let report = match step {
            LoadStep::Conditions => {
                self.load_table::<ConditionRecord>(table, &paths.conditions)
                    .await?
            }
            LoadStep::Symptoms => {
                self.load_table::<SymptomRecord>(table, &paths.symptoms)
                    .await?
            }
            LoadStep::Mappings => {
                self.load_table::<MappingRecord>(table, &paths.mappings)
                    .await?
            }
            LoadStep::Rules => self.load_table::<RuleRecord>(table, &paths.rules).await?,
        };
        tracing::info!(
            table,
            added = report.added,
            skipped = report.skipped,
            unresolved = report.unresolved,
            "table loaded"
        );
        Ok(report)
    }

    /// Re-read counts and assemble the final report.
    async fn finish(
        &self,
        before: TableCounts,
        tables: Vec<TableReport>,
    ) -> Result<LoadReport, LoadError> {
        let after = self
            .db
            .table_counts()
            .await
            .map_err(LoadError::db(COUNTS))?;
        let report = LoadReport {
            before,
            after,
            tables,
        };
        if report.total_added() > 0 {
            tracing::info!(total_added = report.total_added(), "load finished");
        } else {
            tracing::info!("all data was already present, nothing added");
        }
        Ok(report)
    }

    async fn load_table<R: ApplyRecord>(
        &self,
        table: &'static str,
        path: &std::path::Path,
    ) -> Result<TableReport, LoadError> {
        let records: Vec<R> = read_records(path)?;
        let mut report = TableReport::new(table, records.len());

        let tx = self
            .db
            .conn()
            .transaction()
            .await
            .map_err(|e| LoadError::db(table)(e.into()))?;

        for (idx, record) in records.iter().enumerate() {
            if let Err(err) = record.apply(&tx, idx + 1, &mut report).await {
                tracing::error!(table, row = idx + 1, error = %err, "load failed, rolling back");
                if let Err(rollback) = tx.rollback().await {
                    tracing::error!(table, error = %rollback, "rollback failed");
                }
                return Err(err);
            }
        }

        tx.commit()
            .await
            .map_err(|e| LoadError::db(table)(e.into()))?;
        Ok(report)
    }
}

/// Insert-or-skip behavior for one CSV row type.
trait ApplyRecord: CsvRecord {
    async fn apply(
        &self,
        conn: &Connection,
        row: usize,
        report: &mut TableReport,
    ) -> Result<(), LoadError>;
}

fn db_err(table: &'static str) -> impl Fn(DatabaseError) -> LoadError {
    LoadError::db(table)
}

fn invalid(table: &'static str, row: usize, reason: impl ToString) -> LoadError {
    LoadError::InvalidRow {
        table,
        row,
        reason: reason.to_string(),
    }
}

fn require_name(table: &'static str, row: usize, column: &str, value: &str) -> Result<(), LoadError> {
    if value.is_empty() {
        return Err(invalid(table, row, format!("{column} is empty")));
    }
    Ok(())
}

/// Parse a `[0, 1]` column, falling back to `default` for a blank cell.
fn unit_interval(
    table: &'static str,
    row: usize,
    column: &str,
    value: &str,
    default: f64,
) -> Result<f64, LoadError> {
    if value.is_empty() {
        return Ok(default);
    }
    let parsed: f64 = value
        .parse()
        .map_err(|_| invalid(table, row, format!("{column} '{value}' is not a number")))?;
    check_unit_interval(column, parsed).map_err(|e| invalid(table, row, e))
}

impl ApplyRecord for ConditionRecord {
    async fn apply(
        &self,
        conn: &Connection,
        row: usize,
        report: &mut TableReport,
    ) -> Result<(), LoadError> {
        let table = report.table;
        require_name(table, row, "name", &self.name)?;
        let emergency_level = if self.emergency_level.is_empty() {
            EmergencyLevel::default()
        } else {
            self.emergency_level
                .parse::<EmergencyLevel>()
                .map_err(|e| invalid(table, row, e))?
        };

        if conditions::find_condition_id_by_name(conn, &self.name)
            .await
            .map_err(db_err(table))?
            .is_some()
        {
            report.skipped += 1;
            return Ok(());
        }

        conditions::insert_condition(
            conn,
            &NewCondition {
                name: self.name.clone(),
                category: non_empty(&self.category),
                emergency_level,
                description: non_empty(&self.description),
                external_id: None,
            },
        )
        .await
        .map_err(db_err(table))?;
        report.added += 1;
        Ok(())
    }
}

impl ApplyRecord for SymptomRecord {
    async fn apply(
        &self,
        conn: &Connection,
        row: usize,
        report: &mut TableReport,
    ) -> Result<(), LoadError> {
        let table = report.table;
        require_name(table, row, "name", &self.name)?;

        if symptoms::find_symptom_id_by_name(conn, &self.name)
            .await
            .map_err(db_err(table))?
            .is_some()
        {
            report.skipped += 1;
            return Ok(());
        }

        symptoms::insert_symptom(
            conn,
            &NewSymptom {
                name: self.name.clone(),
                category: non_empty(&self.category),
                description: non_empty(&self.description),
                external_id: None,
            },
        )
        .await
        .map_err(db_err(table))?;
        report.added += 1;
        Ok(())
    }
}

impl ApplyRecord for MappingRecord {
    async fn apply(
        &self,
        conn: &Connection,
        row: usize,
        report: &mut TableReport,
    ) -> Result<(), LoadError> {
        let table = report.table;
        let strength = unit_interval(
            table,
            row,
            "strength",
            &self.strength,
            SymptomConditionMapping::DEFAULT_STRENGTH,
        )?;

        let symptom_id = symptoms::find_symptom_id_by_name(conn, &self.symptom_name)
            .await
            .map_err(db_err(table))?;
        let condition_id = conditions::find_condition_id_by_name(conn, &self.condition_name)
            .await
            .map_err(db_err(table))?;
        let (Some(symptom_id), Some(condition_id)) = (symptom_id, condition_id) else {
            tracing::warn!(
                row,
                symptom = %self.symptom_name,
                condition = %self.condition_name,
                "could not find symptom or condition, skipping mapping"
            );
            report.unresolved += 1;
            return Ok(());
        };

        if mappings::mapping_exists(conn, symptom_id, condition_id)
            .await
            .map_err(db_err(table))?
        {
            report.skipped += 1;
            return Ok(());
        }

        mappings::insert_mapping(
            conn,
            &SymptomConditionMapping {
                symptom_id,
                condition_id,
                strength,
            },
        )
        .await
        .map_err(db_err(table))?;
        report.added += 1;
        Ok(())
    }
}

impl ApplyRecord for RuleRecord {
    async fn apply(
        &self,
        conn: &Connection,
        row: usize,
        report: &mut TableReport,
    ) -> Result<(), LoadError> {
        let table = report.table;
        require_name(table, row, "rule_name", &self.rule_name)?;
        let rule_type = self
            .rule_type
            .parse::<RuleType>()
            .map_err(|e| invalid(table, row, e))?;
        let rule_data: serde_json::Value =
            serde_json::from_str(&self.rule_data).map_err(|source| LoadError::InvalidRuleData {
                row,
                rule_name: self.rule_name.clone(),
                source,
            })?;
        let confidence = unit_interval(
            table,
            row,
            "confidence",
            &self.confidence,
            MedicalRule::DEFAULT_CONFIDENCE,
        )?;

        let Some(condition_id) = conditions::find_condition_id_by_name(conn, &self.condition_name)
            .await
            .map_err(db_err(table))?
        else {
            tracing::warn!(
                row,
                condition = %self.condition_name,
                rule = %self.rule_name,
                "could not find condition, skipping rule"
            );
            report.unresolved += 1;
            return Ok(());
        };

        if rules::find_rule_id(conn, condition_id, &self.rule_name)
            .await
            .map_err(db_err(table))?
            .is_some()
        {
            report.skipped += 1;
            return Ok(());
        }

        rules::insert_rule(
            conn,
            &NewMedicalRule {
                condition_id,
                rule_type,
                rule_name: self.rule_name.clone(),
                rule_data,
                confidence,
            },
        )
        .await
        .map_err(db_err(table))?;
        report.added += 1;
        Ok(())
    }
}
