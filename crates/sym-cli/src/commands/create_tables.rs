use anyhow::Context;
use sym_config::SymConfig;

use crate::cli::GlobalFlags;
use crate::output::output;
use crate::progress::Progress;

/// Handle `symcheck create-tables`.
pub async fn handle(config: &SymConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let db = super::open_db(config).await?;

    let progress = Progress::spinner("Checking schema");
    let outcome = match db.sync_schema().await {
        Ok(outcome) => outcome,
        Err(error) => {
            progress.finish_err("Schema sync failed");
            return Err(error).context("failed to create tables");
        }
    };
    progress.finish_ok("Schema ready");

    db.close();
    output(&outcome, flags.format)
}
