pub mod conditions;
pub mod counts;
pub mod create_tables;
pub mod dispatch;
pub mod load;
pub mod ping;
pub mod serve;
pub mod sessions;

use anyhow::Context;
use sym_config::SymConfig;
use sym_db::SymDb;

/// Open the configured database.
pub async fn open_db(config: &SymConfig) -> anyhow::Result<SymDb> {
    let path = &config.database.path;
    SymDb::open_local(path)
        .await
        .with_context(|| format!("failed to open database at {path}"))
}
