//! Owners command implementation.
//!
//! Responsibilities:
//! - List authorized owners filtered by email
//! - Resolve an email to an owner id
//!
//! Does NOT handle:
//! - Direct REST API calls (handled by client crate)
//!
//! Invariants:
//! - The email comes from `--email`, falling back to `OWNER_CREDENTIALS`

use anyhow::{Context, Result};
use render_config::Config;
use tracing::info;

use crate::cancellation::{CancellationToken, Cancelled};
use crate::formatters::{OutputFormat, get_formatter, output_result};

pub(crate) fn resolve_email(config: &Config, email: Option<String>) -> Result<String> {
    email
        .or_else(|| config.auth.owner_credentials.clone())
        .context("No owner email given. Pass --email or set OWNER_CREDENTIALS")
}

pub async fn run_list(
    config: Config,
    email: Option<String>,
    limit: Option<u32>,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let email = resolve_email(&config, email)?;
    let limit = limit.unwrap_or(config.default_limit);
    info!("Listing owners for {}", email);

    let client = crate::commands::build_client_from_config(&config)?;

    let owners = tokio::select! {
        res = client.list_authorized_users(&email, limit) => res?,
        _ = cancel.cancelled() => return Err(Cancelled.into()),
    };

    let output = get_formatter(format).format_owners(&owners)?;
    output_result(&output);
    Ok(())
}

pub async fn run_owner_id(
    config: Config,
    email: Option<String>,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let email = resolve_email(&config, email)?;
    let client = crate::commands::build_client_from_config(&config)?;

    let id = tokio::select! {
        res = client.resolve_owner_id(&email) => res?,
        _ = cancel.cancelled() => return Err(Cancelled.into()),
    };

    let output = get_formatter(format).format_owner_id(&id)?;
    output_result(&output);
    Ok(())
}
