use anyhow::Context;
use sym_config::SymConfig;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `symcheck counts`.
pub async fn handle(config: &SymConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let db = super::open_db(config).await?;
    let counts = db
        .table_counts()
        .await
        .context("failed to count rows (run `symcheck create-tables` first?)")?;
    db.close();
    output(&counts, flags.format)
}
