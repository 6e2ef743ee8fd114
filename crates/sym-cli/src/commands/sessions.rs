use anyhow::Context;
use sym_config::SymConfig;
use sym_db::repos::{profiles, sessions};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SessionsArgs;
use crate::output::output;

/// Handle `symcheck sessions [--id ID] [--limit N]`.
pub async fn handle(args: &SessionsArgs, config: &SymConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let db = super::open_db(config).await?;
    if let Some(id) = args.id {
        let detail = profiles::session_detail(db.conn(), id)
            .await
            .with_context(|| format!("failed to read session {id}"))?;
        db.close();
        return output(&detail, flags.format);
    }

    let recent = sessions::list_recent_sessions(db.conn(), args.limit)
        .await
        .context("failed to list sessions")?;
    db.close();
    output(&recent, flags.format)
}
