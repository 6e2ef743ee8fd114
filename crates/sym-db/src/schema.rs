//! Table definitions for the symcheck schema.
//!
//! The schema is plain data: one [`TableDef`] per table, listed in foreign-key
//! dependency order so creating them front to back never references a table
//! that does not exist yet. Row mapping lives in `repos`, not here.

/// One table of the canonical schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    /// `CREATE TABLE IF NOT EXISTS` statement for the table.
    pub create_sql: &'static str,
    /// `CREATE INDEX IF NOT EXISTS` statements run right after the table.
    pub indexes: &'static [&'static str],
}

pub const CONDITIONS: TableDef = TableDef {
    name: "conditions",
    create_sql: "CREATE TABLE IF NOT EXISTS conditions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        category TEXT,
        emergency_level TEXT NOT NULL DEFAULT 'low'
            CHECK (emergency_level IN ('low', 'medium', 'high', 'critical')),
        description TEXT,
        external_id TEXT UNIQUE,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    )",
    indexes: &["CREATE INDEX IF NOT EXISTS idx_conditions_category ON conditions(category)"],
};

pub const SYMPTOMS: TableDef = TableDef {
    name: "symptoms",
    create_sql: "CREATE TABLE IF NOT EXISTS symptoms (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        category TEXT,
        description TEXT,
        external_id TEXT UNIQUE,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    )",
    indexes: &["CREATE INDEX IF NOT EXISTS idx_symptoms_category ON symptoms(category)"],
};

pub const SYMPTOM_CONDITION_MAPPINGS: TableDef = TableDef {
    name: "symptom_condition_mappings",
    create_sql: "CREATE TABLE IF NOT EXISTS symptom_condition_mappings (
        symptom_id INTEGER NOT NULL REFERENCES symptoms(id),
        condition_id INTEGER NOT NULL REFERENCES conditions(id),
        strength REAL NOT NULL DEFAULT 0.5 CHECK (strength >= 0.0 AND strength <= 1.0),
        PRIMARY KEY (symptom_id, condition_id)
    )",
    indexes: &[
        "CREATE INDEX IF NOT EXISTS idx_mappings_condition ON symptom_condition_mappings(condition_id)",
    ],
};

pub const SYMPTOM_SESSIONS: TableDef = TableDef {
    name: "symptom_sessions",
    create_sql: "CREATE TABLE IF NOT EXISTS symptom_sessions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_age INTEGER,
        user_gender TEXT,
        symptoms_input TEXT NOT NULL DEFAULT '[]',
        predictions TEXT NOT NULL DEFAULT 'null',
        confidence REAL NOT NULL DEFAULT 0.0,
        urgency TEXT CHECK (urgency IS NULL OR urgency IN ('low', 'medium', 'high', 'emergency')),
        created_at TEXT NOT NULL DEFAULT (datetime('now')),
        completed_at TEXT
    )",
    indexes: &[
        "CREATE INDEX IF NOT EXISTS idx_sessions_created ON symptom_sessions(created_at)",
    ],
};

pub const MEDICAL_RULES: TableDef = TableDef {
    name: "medical_rules",
    create_sql: "CREATE TABLE IF NOT EXISTS medical_rules (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        condition_id INTEGER NOT NULL REFERENCES conditions(id),
        rule_type TEXT NOT NULL
            CHECK (rule_type IN ('emergency', 'diagnostic', 'treatment')),
        rule_name TEXT NOT NULL,
        rule_data TEXT NOT NULL DEFAULT '{}',
        confidence REAL NOT NULL DEFAULT 0.5 CHECK (confidence >= 0.0 AND confidence <= 1.0),
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    )",
    indexes: &[
        "CREATE INDEX IF NOT EXISTS idx_rules_condition_name ON medical_rules(condition_id, rule_name)",
    ],
};

pub const API_CALLS: TableDef = TableDef {
    name: "api_calls",
    create_sql: "CREATE TABLE IF NOT EXISTS api_calls (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        session_id INTEGER NOT NULL REFERENCES symptom_sessions(id),
        provider TEXT NOT NULL,
        endpoint TEXT NOT NULL,
        response_time_ms INTEGER,
        cost REAL,
        called_at TEXT NOT NULL DEFAULT (datetime('now'))
    )",
    indexes: &["CREATE INDEX IF NOT EXISTS idx_api_calls_session ON api_calls(session_id)"],
};

/// Every table, parents before children.
pub const SCHEMA: &[TableDef] = &[
    CONDITIONS,
    SYMPTOMS,
    SYMPTOM_CONDITION_MAPPINGS,
    SYMPTOM_SESSIONS,
    MEDICAL_RULES,
    API_CALLS,
];

/// Tables whose presence makes the database ready for a bulk load.
pub const EXPECTED_TABLES: &[&str] = &[
    CONDITIONS.name,
    SYMPTOMS.name,
    MEDICAL_RULES.name,
    SYMPTOM_CONDITION_MAPPINGS.name,
];

/// Look up a table definition by name.
#[must_use]
pub fn table(name: &str) -> Option<&'static TableDef> {
    SCHEMA.iter().find(|t| t.name == name)
}
