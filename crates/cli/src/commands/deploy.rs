//! Deploy command implementation.
//!
//! Responsibilities:
//! - Provision the Postgres and Redis instances a TOML deployment file declares
//!
//! Does NOT handle:
//! - Parsing or defaulting the file (handled by the client crate)
//!
//! Invariants:
//! - The owner email comes from `--email`, falling back to `OWNER_CREDENTIALS`

use std::path::PathBuf;

use anyhow::{Context, Result};
use render_client::RenderClient;
use render_config::Config;
use tracing::info;

use crate::cancellation::{CancellationToken, Cancelled};
use crate::commands::owners::resolve_email;
use crate::formatters::{OutputFormat, get_formatter, output_result};

pub async fn run(
    config: Config,
    file: PathBuf,
    email: Option<String>,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let email = resolve_email(&config, email)?;
    info!("Deploying {} for {}", file.display(), email);

    let client = RenderClient::builder()
        .from_config(&config)
        .owner_credentials(email)
        .build()?;

    let report = tokio::select! {
        res = client.deploy_configuration(&file) => {
            res.with_context(|| format!("Failed to deploy {}", file.display()))?
        }
        _ = cancel.cancelled() => return Err(Cancelled.into()),
    };

    let output = get_formatter(format).format_deployment(&report)?;
    output_result(&output);
    Ok(())
}
