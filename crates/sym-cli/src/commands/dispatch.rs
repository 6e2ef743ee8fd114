use sym_config::SymConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &SymConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::CreateTables => commands::create_tables::handle(config, flags).await,
        Commands::Load(args) => commands::load::handle(&args, config, flags).await,
        Commands::Counts => commands::counts::handle(config, flags).await,
        Commands::Ping => commands::ping::handle(config, flags).await,
        Commands::Conditions(args) => commands::conditions::handle(&args, config, flags).await,
        Commands::Sessions(args) => commands::sessions::handle(&args, config, flags).await,
        Commands::Serve(args) => commands::serve::handle(&args, config).await,
    }
}
