//! JSON formatter implementation.

use anyhow::Result;
use render_client::{DeploymentReport, OwnerResponse, Service};

use crate::formatters::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_owners(&self, owners: &[OwnerResponse]) -> Result<String> {
        // Owners are printed unwrapped; the cursor is not useful on the command line.
        let owners: Vec<_> = owners.iter().map(|entry| &entry.owner).collect();
        Ok(serde_json::to_string_pretty(&owners)?)
    }

    fn format_owner_id(&self, id: &str) -> Result<String> {
        Ok(serde_json::to_string_pretty(&serde_json::json!({ "id": id }))?)
    }

    fn format_services(&self, services: &[Service]) -> Result<String> {
        Ok(serde_json::to_string_pretty(services)?)
    }

    fn format_service(&self, service: &Service) -> Result<String> {
        Ok(serde_json::to_string_pretty(service)?)
    }

    fn format_deleted(&self, id: &str) -> Result<String> {
        Ok(serde_json::to_string_pretty(&serde_json::json!({ "deleted": id }))?)
    }

    fn format_deployment(&self, report: &DeploymentReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_services_is_empty_array() {
        assert_eq!(JsonFormatter.format_services(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_service_uses_api_field_names() {
        let service = Service {
            id: "srv-1".to_string(),
            name: "docs".to_string(),
            branch: None,
            dashboard_url: "https://dashboard.render.com/static/srv-1".to_string(),
            service_type: "static_site".to_string(),
            repo: None,
            created_at: "2024-07-01T10:00:00.000Z".to_string(),
            updated_at: "2024-07-01T10:00:00.000Z".to_string(),
        };
        let output = JsonFormatter.format_service(&service).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["dashboardUrl"], "https://dashboard.render.com/static/srv-1");
        assert_eq!(value["type"], "static_site");
        assert!(value.get("branch").is_none());
    }

    #[test]
    fn test_deployment_omits_absent_instances() {
        let report = DeploymentReport::default();
        assert_eq!(JsonFormatter.format_deployment(&report).unwrap(), "{}");
    }
}
