//! CLI command implementations.

pub mod deploy;
pub mod owners;
pub mod services;

use anyhow::Result;
use render_client::RenderClient;
use render_config::Config;

pub fn build_client_from_config(config: &Config) -> Result<RenderClient> {
    Ok(RenderClient::builder().from_config(config).build()?)
}
