use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create any missing tables; existing tables are left alone.
    CreateTables,
    /// Load the knowledge base from CSV files, skipping rows already present.
    Load(LoadArgs),
    /// Show row counts of the knowledge base tables.
    Counts,
    /// Check that the database can be opened and queried.
    Ping,
    /// List conditions, or show one with its mapped symptoms and rules.
    Conditions(ConditionsArgs),
    /// List recent analysis sessions, or show one with its engine calls.
    Sessions(SessionsArgs),
    /// Run the HTTP API.
    Serve(ServeArgs),
}

#[derive(Clone, Debug, Args)]
pub struct LoadArgs {
    /// Directory holding conditions.csv, symptoms.csv, symptom_condition_mappings.csv and medical_rules.csv
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Load even if the tables already contain data
    #[arg(long)]
    pub allow_nonempty: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ConditionsArgs {
    /// Exact condition name to show in detail
    pub name: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SessionsArgs {
    /// Show a single session by id
    #[arg(long)]
    pub id: Option<i64>,

    /// Number of sessions to list, newest first
    #[arg(long, default_value_t = 20)]
    pub limit: u32,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on, e.g. 127.0.0.1:8000
    #[arg(long)]
    pub addr: Option<String>,

    /// Do not store /analyze requests as symptom sessions
    #[arg(long)]
    pub no_record_sessions: bool,
}
