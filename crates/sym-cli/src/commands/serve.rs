use std::sync::Arc;

use anyhow::Context;
use sym_api::AppState;
use sym_config::SymConfig;

use crate::cli::root_commands::ServeArgs;

/// Handle `symcheck serve`. Runs until the server fails or the process is stopped.
pub async fn handle(args: &ServeArgs, config: &SymConfig) -> anyhow::Result<()> {
    let db = super::open_db(config).await?;
    db.sync_schema().await.context("failed to synchronize schema")?;

    let addr = args.addr.as_deref().unwrap_or(&config.server.addr);
    let record_sessions = config.server.record_sessions && !args.no_record_sessions;
    let state = AppState::new(Arc::new(db), record_sessions);

    sym_api::serve(addr, state)
        .await
        .with_context(|| format!("API server on {addr} failed"))
}
