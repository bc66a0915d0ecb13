//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Render owners, services, and deployments as an aligned table or pretty-printed JSON.
//!
//! Does NOT handle:
//! - Fetching data (see `commands`).
//!
//! Invariants:
//! - JSON output is always valid JSON; an empty list prints `[]`.
//! - Table output prints a human message for empty lists and `-` for missing values.

use anyhow::Result;
use render_client::{DeploymentReport, OwnerResponse, Service};

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table", s),
        }
    }
}

/// Formatter trait for different output types.
pub trait Formatter {
    fn format_owners(&self, owners: &[OwnerResponse]) -> Result<String>;

    fn format_owner_id(&self, id: &str) -> Result<String>;

    fn format_services(&self, services: &[Service]) -> Result<String>;

    /// Format a single (newly created) service.
    fn format_service(&self, service: &Service) -> Result<String>;

    /// Format the confirmation for a deleted service id.
    fn format_deleted(&self, id: &str) -> Result<String>;

    /// Format the instances a deployment created.
    fn format_deployment(&self, report: &DeploymentReport) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}

/// Write formatted output to stdout.
pub fn output_result(output: &str) {
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("TABLE").unwrap(), OutputFormat::Table);
        assert!(OutputFormat::from_str("xml").is_err());
    }
}
