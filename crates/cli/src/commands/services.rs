//! Services command implementation.
//!
//! Responsibilities:
//! - List services with shorthand and free-form `KEY=VALUE` filters
//! - Create a service from a JSON file
//! - Delete a service by id, or by name and type
//!
//! Does NOT handle:
//! - Direct REST API calls (handled by client crate)
//! - Validating create bodies (the API owns the schema)
//!
//! Invariants:
//! - `--limit` and a `--filter limit=N` both set the same query parameter

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use render_client::ServiceFilters;
use render_config::Config;
use tracing::info;

use crate::cancellation::{CancellationToken, Cancelled};
use crate::formatters::{OutputFormat, get_formatter, output_result};

#[derive(Debug, Subcommand)]
pub enum ServicesCommand {
    /// List services
    List {
        /// Service type (e.g. web_service, static_site)
        #[arg(long = "type")]
        service_type: Option<String>,
        /// Service name
        #[arg(long)]
        name: Option<String>,
        /// Region (e.g. oregon, frankfurt)
        #[arg(long)]
        region: Option<String>,
        /// Runtime environment (e.g. docker, node, image)
        #[arg(long)]
        env: Option<String>,
        /// Suspension status (suspended, not_suspended)
        #[arg(long)]
        suspended: Option<String>,
        /// Additional query filter, repeatable
        #[arg(long = "filter", value_name = "KEY=VALUE", value_parser = parse_key_val)]
        filters: Vec<(String, String)>,
        /// Maximum number of services to return
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=100))]
        limit: Option<u32>,
    },
    /// Create a service from a JSON request body
    Create {
        /// Path to the JSON body
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Delete a service by id, or by name and type
    Delete {
        /// Service id
        #[arg(required_unless_present = "name", conflicts_with = "name")]
        id: Option<String>,
        /// Service name
        #[arg(long, requires = "service_type")]
        name: Option<String>,
        /// Service type
        #[arg(long = "type", requires = "name")]
        service_type: Option<String>,
    },
}

/// Parse a `KEY=VALUE` filter argument.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("invalid filter '{}': expected KEY=VALUE", s)),
    }
}

pub async fn run(
    config: Config,
    command: ServicesCommand,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        ServicesCommand::List {
            service_type,
            name,
            region,
            env,
            suspended,
            filters,
            limit,
        } => {
            let mut query: ServiceFilters = filters.into_iter().collect();
            let shorthands = [
                ("type", service_type),
                ("name", name),
                ("region", region),
                ("env", env),
                ("suspended", suspended),
            ];
            for (key, value) in shorthands {
                if let Some(value) = value {
                    query = query.filter(key, value);
                }
            }
            if let Some(limit) = limit {
                query = query.limit(limit);
            }
            run_list(config, query, format, cancel).await
        }
        ServicesCommand::Create { file } => run_create(config, file, format, cancel).await,
        ServicesCommand::Delete {
            id,
            name,
            service_type,
        } => run_delete(config, id, name, service_type, format, cancel).await,
    }
}

async fn run_list(
    config: Config,
    filters: ServiceFilters,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    info!("Listing services");

    let client = crate::commands::build_client_from_config(&config)?;

    let services = tokio::select! {
        res = client.list_services(&filters) => res?,
        _ = cancel.cancelled() => return Err(Cancelled.into()),
    };

    let output = get_formatter(format).format_services(&services)?;
    output_result(&output);
    Ok(())
}

async fn run_create(
    config: Config,
    file: PathBuf,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let content = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let body: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", file.display()))?;

    info!("Creating service from {}", file.display());
    let client = crate::commands::build_client_from_config(&config)?;

    let service = tokio::select! {
        res = client.create_service(&body) => res.context("Failed to create service")?,
        _ = cancel.cancelled() => return Err(Cancelled.into()),
    };

    let output = get_formatter(format).format_service(&service)?;
    output_result(&output);
    Ok(())
}

async fn run_delete(
    config: Config,
    id: Option<String>,
    name: Option<String>,
    service_type: Option<String>,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = crate::commands::build_client_from_config(&config)?;

    let deleted = match (id, name, service_type) {
        (Some(id), _, _) => {
            info!("Deleting service {}", id);
            tokio::select! {
                res = client.delete_service(&id) => res.context("Failed to delete service")?,
                _ = cancel.cancelled() => return Err(Cancelled.into()),
            };
            id
        }
        (None, Some(name), Some(service_type)) => {
            info!("Deleting {} service {}", service_type, name);
            tokio::select! {
                res = client.delete_service_by_name_and_type(&name, &service_type) => {
                    res.context("Failed to delete service")?
                }
                _ = cancel.cancelled() => return Err(Cancelled.into()),
            }
        }
        _ => anyhow::bail!("Pass a service id, or both --name and --type"),
    };

    let output = get_formatter(format).format_deleted(&deleted)?;
    output_result(&output);
    Ok(())
}
