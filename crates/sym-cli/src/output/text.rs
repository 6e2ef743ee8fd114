//! Human-readable rendering for `--format text`.

use std::fmt::Write;

use serde::Serialize;
use sym_db::repos::TableCounts;
use sym_db::sync::SyncOutcome;
use sym_loader::{LoadOutcome, LoadReport};

pub trait TextRender {
    fn render_text(&self) -> String;
}

/// Result of `symcheck ping`.
#[derive(Debug, Serialize)]
pub struct PingResult {
    pub database: String,
    pub status: &'static str,
}

impl TextRender for PingResult {
    fn render_text(&self) -> String {
        format!("database {} is reachable", self.database)
    }
}

fn counts_lines(out: &mut String, counts: &TableCounts) {
    let _ = writeln!(out, "  conditions: {} records", counts.conditions);
    let _ = writeln!(out, "  symptoms: {} records", counts.symptoms);
    let _ = writeln!(out, "  rules: {} records", counts.rules);
    let _ = write!(out, "  mappings: {} records", counts.mappings);
}

impl TextRender for TableCounts {
    fn render_text(&self) -> String {
        let mut out = String::from("Current database state:\n");
        counts_lines(&mut out, self);
        out
    }
}

impl TextRender for SyncOutcome {
    fn render_text(&self) -> String {
        let mut out = String::new();
        for table in &self.report.tables {
            let state = if table.exists { "exists" } else { "missing" };
            let _ = writeln!(out, "  {}: {state}", table.name);
        }
        if self.created.is_empty() {
            out.push_str("All tables already exist - no action needed");
        } else {
            let _ = write!(out, "Created tables: {}", self.created.join(", "));
        }
        out
    }
}

impl TextRender for LoadReport {
    fn render_text(&self) -> String {
        let mut out = String::from("Before:\n");
        counts_lines(&mut out, &self.before);
        out.push('\n');
        for table in &self.tables {
            let _ = write!(
                out,
                "\n{}: added {}, skipped {} existing",
                table.table, table.added, table.skipped
            );
            if table.unresolved > 0 {
                let _ = write!(out, ", {} unresolved", table.unresolved);
            }
        }
        out.push_str("\n\nAfter:\n");
        counts_lines(&mut out, &self.after);
        out.push_str("\n\n");
        let total = self.total_added();
        if total > 0 {
            let _ = write!(out, "Added {total} new records");
        } else {
            out.push_str("All data was already present - no duplicates created");
        }
        out
    }
}

impl TextRender for LoadOutcome {
    fn render_text(&self) -> String {
        match self {
            Self::Declined { existing } => {
                let mut out = String::from("Current database state:\n");
                counts_lines(&mut out, existing);
                let _ = write!(
                    out,
                    "\n\nDatabase already contains {} records; nothing loaded (pass --allow-nonempty to add new rows)",
                    existing.total()
                );
                out
            }
            Self::Completed(report) => report.render_text(),
        }
    }
}
