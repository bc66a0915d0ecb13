//! Typed request bodies for creating services.
//!
//! # What this module handles:
//! - The `POST /services` body shape (`ServiceTemplate`) and its nested parts
//! - Builder helpers for the common fields
//!
//! # What this module does NOT handle:
//! - Sending the request (see [`crate::endpoints::services`])
//! - Validating the body; the remote API owns the schema
//!
//! # Invariants
//! - `None` fields and empty lists are omitted from the serialized JSON
//! - Field names serialize in the API's camelCase

use serde::{Deserialize, Serialize};

/// Body of a create-service request.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTemplate {
    /// Service type, e.g. `static_site` or `web_service`.
    #[serde(rename = "type")]
    pub service_type: String,
    pub name: String,
    pub owner_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,

    /// `yes` or `no`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_deploy: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_filter: Option<BuildFilter>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_dir: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env_vars: Vec<EnvVar>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secret_files: Vec<SecretFile>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_details: Option<ServiceDetails>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoscaling: Option<AutoScaling>,
}

impl ServiceTemplate {
    /// Create a template with the three fields every service needs.
    ///
    /// # Example
    /// ```
    /// use render_client::models::ServiceTemplate;
    ///
    /// let template = ServiceTemplate::new("static_site", "docs", "usr-a1b2c3d4")
    ///     .with_repo("https://github.com/example/docs")
    ///     .with_branch("main");
    /// assert_eq!(template.branch.as_deref(), Some("main"));
    /// ```
    pub fn new(
        service_type: impl Into<String>,
        name: impl Into<String>,
        owner_id: impl Into<String>,
    ) -> Self {
        Self {
            service_type: service_type.into(),
            name: name.into(),
            owner_id: owner_id.into(),
            ..Self::default()
        }
    }

    pub fn with_repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = Some(repo.into());
        self
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn with_image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }

    /// Append a plain `key=value` environment variable.
    pub fn with_env_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.push(EnvVar::new(key, value));
        self
    }

    pub fn with_secret_file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.secret_files.push(SecretFile {
            name: name.into(),
            content: content.into(),
        });
        self
    }

    pub fn with_service_details(mut self, details: ServiceDetails) -> Self {
        self.service_details = Some(details);
        self
    }

    pub fn with_autoscaling(mut self, autoscaling: AutoScaling) -> Self {
        self.autoscaling = Some(autoscaling);
        self
    }
}

/// Prebuilt container image to deploy instead of a repository.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub owner_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_credential_id: Option<String>,
    pub image_path: String,
}

/// Paths that do or do not trigger an auto-deploy.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildFilter {
    #[serde(default)]
    pub paths: Vec<String>,
    #[serde(default)]
    pub ignored_paths: Vec<String>,
}

/// Environment variable attached to a new service.
///
/// Either `value` is set, or `generate_value` asks the server for a random one.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvVar {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    pub generate_value: bool,
}

impl EnvVar {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
            generate_value: false,
        }
    }

    /// Variable whose value the server generates.
    pub fn generated(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
            generate_value: true,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecretFile {
    pub name: String,
    pub content: String,
}

/// Type-specific settings (region, plan, commands, routing).
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_deploy_command: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,
    /// Output directory for static sites.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request_previews_enabled: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_instances: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<Route>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_specific_details: Option<EnvSpecificDetails>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvSpecificDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_command: Option<String>,
}

/// HTTP response header rule for static sites.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub path: String,
    pub name: String,
    pub value: String,
}

/// Redirect or rewrite rule for static sites.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// `redirect` or `rewrite`.
    #[serde(rename = "type")]
    pub route_type: String,
    pub source: String,
    pub destination: String,
    #[serde(default)]
    pub priority: u32,
}

/// Instance autoscaling bounds.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoScaling {
    pub min: u32,
    pub max: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria: Option<ScalingCriteria>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<UtilizationTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<UtilizationTarget>,
}

/// Target utilization percentage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilizationTarget {
    pub percentage: u32,
}
