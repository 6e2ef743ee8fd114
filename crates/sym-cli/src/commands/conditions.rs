use anyhow::Context;
use sym_config::SymConfig;
use sym_db::repos::{conditions, profiles};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ConditionsArgs;
use crate::output::output;

/// Handle `symcheck conditions [NAME]`.
pub async fn handle(args: &ConditionsArgs, config: &SymConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let db = super::open_db(config).await?;
    let Some(name) = &args.name else {
        let all = conditions::list_conditions(db.conn())
            .await
            .context("failed to list conditions")?;
        db.close();
        return output(&all, flags.format);
    };

    let profile = profiles::condition_profile(db.conn(), name)
        .await
        .with_context(|| format!("failed to read condition '{name}'"))?;
    db.close();
    let profile = profile.with_context(|| format!("no condition named '{name}'"))?;
    output(&profile, flags.format)
}
