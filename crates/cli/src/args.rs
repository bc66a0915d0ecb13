//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate configuration values (see `render_config::ConfigLoader`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "render-cli")]
#[command(about = "Render CLI - Manage Render services from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  render-cli owners --email me@example.com\n  render-cli services list --type web_service --limit 10\n  render-cli services create --file service.json\n  render-cli services delete --name docs --type static_site\n  render-cli -o json services list --region oregon\n  render-cli deploy --file render.toml\n"
)]
pub struct Cli {
    /// Base URL of the Render API including the version prefix
    #[arg(short, long, global = true, env = "RENDER_BASE_URL")]
    pub base_url: Option<String>,

    /// API key used as the bearer token
    #[arg(short, long, global = true, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "RENDER_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the owners authorized by the API key that match an email
    Owners {
        /// Owner email (defaults to OWNER_CREDENTIALS)
        #[arg(short, long)]
        email: Option<String>,

        /// Number of owners to request before filtering
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=100))]
        limit: Option<u32>,
    },

    /// Print the id of the owner with an email
    OwnerId {
        /// Owner email (defaults to OWNER_CREDENTIALS)
        #[arg(short, long)]
        email: Option<String>,
    },

    /// List, create, and delete services
    Services {
        #[command(subcommand)]
        command: commands::services::ServicesCommand,
    },

    /// Create the Postgres and Redis instances declared in a TOML file
    Deploy {
        /// Path to the deployment file
        #[arg(short, long)]
        file: PathBuf,

        /// Owner email (defaults to OWNER_CREDENTIALS)
        #[arg(short, long)]
        email: Option<String>,
    },
}
