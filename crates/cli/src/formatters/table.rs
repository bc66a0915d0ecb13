//! Table formatter implementation.

use anyhow::Result;
use render_client::{DeploymentReport, OwnerResponse, Service};

use crate::formatters::Formatter;

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_owners(&self, owners: &[OwnerResponse]) -> Result<String> {
        let mut output = String::new();

        if owners.is_empty() {
            output.push_str("No owners found.\n");
            return Ok(output);
        }

        output.push_str(&format!(
            "{:<24} {:<24} {:<32} {:<6} {:<5}\n",
            "ID", "NAME", "EMAIL", "TYPE", "2FA"
        ));
        output.push_str(&format!(
            "{:<24} {:<24} {:<32} {:<6} {:<5}\n",
            "==", "====", "=====", "====", "==="
        ));

        for entry in owners {
            let owner = &entry.owner;
            let two_factor = if owner.two_factor_auth_enabled {
                "yes"
            } else {
                "no"
            };
            output.push_str(&format!(
                "{:<24} {:<24} {:<32} {:<6} {:<5}\n",
                owner.id, owner.name, owner.email, owner.owner_type, two_factor
            ));
        }

        Ok(output)
    }

    fn format_owner_id(&self, id: &str) -> Result<String> {
        Ok(format!("{}\n", id))
    }

    fn format_services(&self, services: &[Service]) -> Result<String> {
        let mut output = String::new();

        if services.is_empty() {
            output.push_str("No services found.\n");
            return Ok(output);
        }

        output.push_str(&format!(
            "{:<26} {:<24} {:<18} {:<12} {:<26}\n",
            "ID", "NAME", "TYPE", "BRANCH", "UPDATED"
        ));
        output.push_str(&format!(
            "{:<26} {:<24} {:<18} {:<12} {:<26}\n",
            "==", "====", "====", "======", "======="
        ));

        for service in services {
            output.push_str(&format!(
                "{:<26} {:<24} {:<18} {:<12} {:<26}\n",
                service.id,
                service.name,
                service.service_type,
                service.branch.as_deref().unwrap_or("-"),
                service.updated_at
            ));
        }

        Ok(output)
    }

    fn format_service(&self, service: &Service) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("ID:         {}\n", service.id));
        output.push_str(&format!("Name:       {}\n", service.name));
        output.push_str(&format!("Type:       {}\n", service.service_type));
        output.push_str(&format!(
            "Repo:       {}\n",
            service.repo.as_deref().unwrap_or("-")
        ));
        output.push_str(&format!(
            "Branch:     {}\n",
            service.branch.as_deref().unwrap_or("-")
        ));
        output.push_str(&format!("Dashboard:  {}\n", service.dashboard_url));
        output.push_str(&format!("Created:    {}\n", service.created_at));
        Ok(output)
    }

    fn format_deleted(&self, id: &str) -> Result<String> {
        Ok(format!("Deleted service {}\n", id))
    }

    fn format_deployment(&self, report: &DeploymentReport) -> Result<String> {
        let mut output = String::new();

        if let Some(postgres) = &report.postgres {
            output.push_str(&format!(
                "postgres  {:<26} {:<24} {}\n",
                postgres.id,
                postgres.name,
                postgres.status.as_deref().unwrap_or("-")
            ));
        }
        if let Some(redis) = &report.redis {
            output.push_str(&format!(
                "redis     {:<26} {:<24} {}\n",
                redis.id,
                redis.name,
                redis.status.as_deref().unwrap_or("-")
            ));
        }
        if output.is_empty() {
            output.push_str("Nothing deployed.\n");
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use render_client::Owner;

    fn service(id: &str, branch: Option<&str>) -> Service {
        Service {
            id: id.to_string(),
            name: "whoami".to_string(),
            branch: branch.map(str::to_string),
            dashboard_url: format!("https://dashboard.render.com/web/{}", id),
            service_type: "web_service".to_string(),
            repo: None,
            created_at: "2024-07-01T10:00:00.000Z".to_string(),
            updated_at: "2024-07-02T11:30:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_empty_lists_print_message() {
        assert_eq!(
            TableFormatter.format_services(&[]).unwrap(),
            "No services found.\n"
        );
        assert_eq!(
            TableFormatter.format_owners(&[]).unwrap(),
            "No owners found.\n"
        );
    }

    #[test]
    fn test_services_table_rows() {
        let output = TableFormatter
            .format_services(&[service("srv-1", Some("main")), service("srv-2", None)])
            .unwrap();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].contains("srv-1") && lines[2].contains("main"));
        assert!(lines[3].contains("srv-2") && lines[3].contains(" - "));
    }

    #[test]
    fn test_owners_table_shows_two_factor() {
        let owners = vec![OwnerResponse {
            owner: Owner {
                id: "usr-1".to_string(),
                name: "Ada".to_string(),
                email: "a@x.com".to_string(),
                two_factor_auth_enabled: true,
                owner_type: "user".to_string(),
            },
            cursor: "c".to_string(),
        }];
        let output = TableFormatter.format_owners(&owners).unwrap();
        assert!(output.contains("a@x.com"));
        assert!(output.contains("yes"));
    }
}
