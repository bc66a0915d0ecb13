//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use render_config::Config;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;
use crate::formatters::OutputFormat;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(
    cli: Cli,
    config: Config,
    cancel_token: &CancellationToken,
) -> Result<()> {
    let format = OutputFormat::from_str(&cli.output)?;

    match cli.command {
        Commands::Owners { email, limit } => {
            commands::owners::run_list(config, email, limit, format, cancel_token).await?;
        }
        Commands::OwnerId { email } => {
            commands::owners::run_owner_id(config, email, format, cancel_token).await?;
        }
        Commands::Services { command } => {
            commands::services::run(config, command, format, cancel_token).await?;
        }
        Commands::Deploy { file, email } => {
            commands::deploy::run(config, file, email, format, cancel_token).await?;
        }
    }

    Ok(())
}
