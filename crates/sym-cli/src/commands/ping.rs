use anyhow::Context;
use sym_config::SymConfig;

use crate::cli::GlobalFlags;
use crate::output::output;
use crate::output::text::PingResult;

/// Handle `symcheck ping`.
pub async fn handle(config: &SymConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let db = super::open_db(config).await?;
    db.ping().await.context("database did not answer SELECT 1")?;
    let result = PingResult {
        database: db.path().to_string(),
        status: "ok",
    };
    db.close();
    output(&result, flags.format)
}
