use anyhow::Context;
use sym_config::SymConfig;

use crate::cli::GlobalFlags;

/// Load layered config (`.env`, TOML, `SYMCHECK_*`) and apply global flag overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SymConfig> {
    let mut config = SymConfig::load_with_dotenv().context("failed to load configuration")?;
    if let Some(path) = &flags.database {
        config.database.path.clone_from(path);
        config.validate().context("invalid --database")?;
    }
    if config.database.is_in_memory() {
        tracing::warn!("using an in-memory database; nothing persists after this command");
    }
    tracing::debug!(database = %config.database.path, "configuration loaded");
    Ok(config)
}
