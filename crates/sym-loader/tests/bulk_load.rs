//! End-to-end loader runs against an in-memory database and CSV fixtures.

use std::fs;

use pretty_assertions::assert_eq;
use sym_db::SymDb;
use sym_loader::{
    BulkLoader, LoadError, LoadObserver, LoadOutcome, LoadReport, LoadStep, LoaderOptions,
    LoaderPaths, TableReport,
};
use tempfile::TempDir;

const CONDITIONS: &str = "\
name,category,emergency_level,description
Common Cold,respiratory,low,Viral infection of the upper airway
Influenza,respiratory,medium,Seasonal flu
Heart Attack,cardiovascular,critical,Blocked coronary artery
";

const SYMPTOMS: &str = "\
name,category,description
cough,respiratory,Persistent cough
fever,general,Raised temperature
chest pain,cardiovascular,Pain or pressure in the chest
";

const MAPPINGS: &str = "\
symptom_name,condition_name,strength
cough,Common Cold,0.7
fever,Influenza,0.9
cough,Influenza,0.6
chest pain,Heart Attack,0.95
";

const RULES: &str = r#"condition_name,rule_type,rule_name,rule_data,confidence
Heart Attack,emergency,chest pain escalation,"{""requires"": [""chest pain""], ""action"": ""call emergency services""}",0.9
Influenza,diagnostic,fever with cough,"{""requires"": [""fever"", ""cough""]}",0.6
"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().unwrap(),
        };
        fixture.write("conditions.csv", CONDITIONS);
        fixture.write("symptoms.csv", SYMPTOMS);
        fixture.write("symptom_condition_mappings.csv", MAPPINGS);
        fixture.write("medical_rules.csv", RULES);
        fixture
    }

    fn write(&self, name: &str, content: &str) {
        fs::write(self.dir.path().join(name), content).unwrap();
    }

    fn paths(&self) -> LoaderPaths {
        LoaderPaths::in_dir(self.dir.path())
    }
}

async fn synced_db() -> SymDb {
    let db = SymDb::open_local(":memory:").await.unwrap();
    db.sync_schema().await.unwrap();
    db
}

async fn load(db: &SymDb, paths: &LoaderPaths, allow_nonempty: bool) -> Result<LoadOutcome, LoadError> {
    BulkLoader::new(db, LoaderOptions { allow_nonempty })
        .run(paths, &mut ())
        .await
}

fn completed(outcome: LoadOutcome) -> LoadReport {
    match outcome {
        LoadOutcome::Completed(report) => report,
        LoadOutcome::Declined { existing } => panic!("load declined with {existing:?}"),
    }
}

#[tokio::test]
async fn fresh_load_inserts_every_row() {
    let fixture = Fixture::new();
    let db = synced_db().await;

    let report = completed(load(&db, &fixture.paths(), false).await.unwrap());

    assert!(report.before.is_empty());
    assert_eq!(report.after.conditions, 3);
    assert_eq!(report.after.symptoms, 3);
    assert_eq!(report.after.mappings, 4);
    assert_eq!(report.after.rules, 2);
    assert_eq!(report.total_added(), 12);
}

#[tokio::test]
async fn second_run_adds_nothing() {
    let fixture = Fixture::new();
    let db = synced_db().await;
    let first = completed(load(&db, &fixture.paths(), false).await.unwrap());

    let second = completed(load(&db, &fixture.paths(), true).await.unwrap());

    assert_eq!(second.total_added(), 0);
    assert_eq!(second.before, first.after);
    assert_eq!(second.after, first.after);
    let mappings = second.table("symptom_condition_mappings").unwrap();
    assert_eq!(mappings.skipped, 4);
}

#[tokio::test]
async fn nonempty_database_is_declined_by_default() {
    let fixture = Fixture::new();
    let db = synced_db().await;
    let first = completed(load(&db, &fixture.paths(), false).await.unwrap());

    let outcome = load(&db, &fixture.paths(), false).await.unwrap();

    assert_eq!(
        outcome,
        LoadOutcome::Declined {
            existing: first.after
        }
    );
    assert_eq!(db.table_counts().await.unwrap(), first.after);
}

#[tokio::test]
async fn repeated_names_in_one_file_insert_once() {
    let fixture = Fixture::new();
    fixture.write(
        "conditions.csv",
        "name,category,emergency_level,description\n\
         Migraine,neurological,medium,Severe headache\n\
         Migraine,neurological,high,Duplicate entry\n",
    );
    fixture.write("symptom_condition_mappings.csv", "symptom_name,condition_name,strength\n");
    fixture.write("medical_rules.csv", "condition_name,rule_type,rule_name,rule_data,confidence\n");
    let db = synced_db().await;

    let report = completed(load(&db, &fixture.paths(), false).await.unwrap());

    let conditions = report.table("conditions").unwrap();
    assert_eq!((conditions.added, conditions.skipped), (1, 1));
    assert_eq!(report.after.conditions, 1);
}

#[tokio::test]
async fn repeated_mapping_pair_inserts_once() {
    let fixture = Fixture::new();
    fixture.write(
        "symptom_condition_mappings.csv",
        "symptom_name,condition_name,strength\n\
         fever,Influenza,0.9\n\
         fever,Influenza,0.4\n",
    );
    let db = synced_db().await;

    let report = completed(load(&db, &fixture.paths(), false).await.unwrap());

    let mappings = report.table("symptom_condition_mappings").unwrap();
    assert_eq!((mappings.added, mappings.skipped), (1, 1));
    assert_eq!(report.after.mappings, 1);
}

#[tokio::test]
async fn unknown_names_are_skipped_and_the_rest_loaded() {
    let fixture = Fixture::new();
    fixture.write(
        "symptom_condition_mappings.csv",
        "symptom_name,condition_name,strength\n\
         cough,Common Cold,0.7\n\
         dizziness,Influenza,0.3\n\
         fever,Influenza,0.9\n",
    );
    fixture.write(
        "medical_rules.csv",
        "condition_name,rule_type,rule_name,rule_data,confidence\n\
         Gout,treatment,rest,{},0.4\n",
    );
    let db = synced_db().await;

    let report = completed(load(&db, &fixture.paths(), false).await.unwrap());

    let mappings = report.table("symptom_condition_mappings").unwrap();
    assert_eq!(mappings.rows, 3);
    assert_eq!(mappings.added, 2);
    assert_eq!(mappings.unresolved, 1);
    let rules = report.table("medical_rules").unwrap();
    assert_eq!((rules.added, rules.unresolved), (0, 1));
}

#[tokio::test]
async fn bad_row_rolls_back_its_table_and_stops_the_run() {
    let fixture = Fixture::new();
    fixture.write(
        "symptom_condition_mappings.csv",
        "symptom_name,condition_name,strength\n\
         cough,Common Cold,0.7\n\
         fever,Influenza,0.9\n\
         cough,Influenza,1.7\n",
    );
    let db = synced_db().await;

    let err = load(&db, &fixture.paths(), false).await.unwrap_err();

    assert!(
        matches!(
            err,
            LoadError::InvalidRow {
                table: "symptom_condition_mappings",
                row: 3,
                ..
            }
        ),
        "{err}"
    );
    let counts = db.table_counts().await.unwrap();
    assert_eq!(counts.conditions, 3, "earlier tables stay committed");
    assert_eq!(counts.symptoms, 3);
    assert_eq!(counts.mappings, 0, "failing table is rolled back");
    assert_eq!(counts.rules, 0, "later tables are not attempted");
}

#[tokio::test]
async fn malformed_rule_payload_aborts_rules() {
    let fixture = Fixture::new();
    fixture.write(
        "medical_rules.csv",
        "condition_name,rule_type,rule_name,rule_data,confidence\n\
         Influenza,diagnostic,ok rule,{},0.5\n\
         Influenza,diagnostic,broken rule,{not json,0.5\n",
    );
    let db = synced_db().await;

    let err = load(&db, &fixture.paths(), false).await.unwrap_err();

    match err {
        LoadError::InvalidRuleData { row, rule_name, .. } => {
            assert_eq!(row, 2);
            assert_eq!(rule_name, "broken rule");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(db.table_counts().await.unwrap().rules, 0);
    assert_eq!(db.table_counts().await.unwrap().mappings, 4);
}

#[tokio::test]
async fn unknown_emergency_level_rolls_back_conditions() {
    let fixture = Fixture::new();
    fixture.write(
        "conditions.csv",
        "name,category,emergency_level,description\n\
         Asthma,respiratory,high,Airway inflammation\n\
         Sprain,musculoskeletal,urgent,Ligament injury\n",
    );
    let db = synced_db().await;

    let err = load(&db, &fixture.paths(), false).await.unwrap_err();

    assert_eq!(err.table(), Some("conditions"));
    assert!(db.table_counts().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_file_is_reported() {
    let fixture = Fixture::new();
    fs::remove_file(fixture.dir.path().join("symptoms.csv")).unwrap();
    let db = synced_db().await;

    let err = load(&db, &fixture.paths(), false).await.unwrap_err();

    assert!(matches!(err, LoadError::Read { .. }), "{err}");
    assert_eq!(db.table_counts().await.unwrap().conditions, 3);
}

#[tokio::test]
async fn database_rejection_mid_batch_rolls_back_its_table() {
    let fixture = Fixture::new();
    let db = synced_db().await;
    // Third mapping row resolves both names but the insert is refused by SQLite.
    db.conn()
        .execute(
            "CREATE TRIGGER reject_cough_influenza BEFORE INSERT ON symptom_condition_mappings
             WHEN NEW.strength = 0.6
             BEGIN SELECT RAISE(ABORT, 'mapping rejected'); END",
            (),
        )
        .await
        .unwrap();

    let err = load(&db, &fixture.paths(), false).await.unwrap_err();

    assert!(
        matches!(
            err,
            LoadError::Database {
                table: "symptom_condition_mappings",
                ..
            }
        ),
        "{err}"
    );
    let counts = db.table_counts().await.unwrap();
    assert_eq!(counts.symptoms, 3);
    assert_eq!(counts.mappings, 0, "rows inserted before the rejection are rolled back");
    assert_eq!(counts.rules, 0);
}

#[derive(Default)]
struct StepLog {
    events: Vec<(LoadStep, Option<usize>)>,
    started: Vec<LoadStep>,
}

impl LoadObserver for StepLog {
    fn step_started(&mut self, step: LoadStep) {
        self.started.push(step);
    }

    fn step_finished(&mut self, step: LoadStep, result: Result<&TableReport, &LoadError>) {
        self.events.push((step, result.ok().map(|r| r.added)));
    }
}

#[tokio::test]
async fn observer_sees_every_step_in_order() {
    let fixture = Fixture::new();
    let db = synced_db().await;
    let mut log = StepLog::default();

    BulkLoader::new(&db, LoaderOptions::default())
        .run(&fixture.paths(), &mut log)
        .await
        .unwrap();

    assert_eq!(log.started, LoadStep::ALL.to_vec());
    assert_eq!(
        log.events,
        vec![
            (LoadStep::Conditions, Some(3)),
            (LoadStep::Symptoms, Some(3)),
            (LoadStep::Mappings, Some(4)),
            (LoadStep::Rules, Some(2)),
        ]
    );
}

#[tokio::test]
async fn observer_sees_the_failing_step_and_nothing_after() {
    let fixture = Fixture::new();
    fixture.write("symptom_condition_mappings.csv", "symptom_name,strength\n");
    let db = synced_db().await;
    let mut log = StepLog::default();

    BulkLoader::new(&db, LoaderOptions::default())
        .run(&fixture.paths(), &mut log)
        .await
        .unwrap_err();

    assert_eq!(
        log.events,
        vec![
            (LoadStep::Conditions, Some(3)),
            (LoadStep::Symptoms, Some(3)),
            (LoadStep::Mappings, None),
        ]
    );
}

#[tokio::test]
async fn declined_load_runs_no_steps() {
    let fixture = Fixture::new();
    let db = synced_db().await;
    load(&db, &fixture.paths(), false).await.unwrap();
    let mut log = StepLog::default();

    let outcome = BulkLoader::new(&db, LoaderOptions::default())
        .run(&fixture.paths(), &mut log)
        .await
        .unwrap();

    assert!(matches!(outcome, LoadOutcome::Declined { .. }));
    assert!(log.started.is_empty());
}
