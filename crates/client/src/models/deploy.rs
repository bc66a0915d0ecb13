//! Datastore deployment files.
//!
//! Responsibilities:
//! - Parse a TOML deployment file with optional `[database]` and `[redis]` sections.
//! - Fill blank values: generated names, an allow-everywhere CIDR entry, the
//!   `starter` Redis plan.
//! - Turn each section into the request body for its create endpoint.
//!
//! Does NOT handle:
//! - Sending requests (see `RenderClient::deploy_configuration`).
//! - Resolving the owner id (the caller supplies it).
//!
//! Invariants:
//! - A file with neither section is rejected.
//! - After `populate_blank_values`, every section has a non-empty name and at
//!   least one CIDR entry, and Redis has a plan.
//!
//! File keys use the API's camelCase names:
//!
//! ```toml
//! [database]
//! name = ""
//! databaseName = "orders"
//! databaseUser = ""
//! enableHighAvailability = false
//! plan = "basic_256mb"
//! version = "16"
//!
//! [redis]
//! name = "sessions"
//! cidrBlocks = [{ cidrBlock = "10.0.0.0/8", description = "office" }]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::models::postgres::{Postgres, PostgresRequest};
use crate::models::redis::{Redis, RedisRequest};

/// Redis plan used when the file leaves it blank.
pub const DEFAULT_REDIS_PLAN: &str = "starter";

const ADJECTIVES: &[&str] = &[
    "agile", "brisk", "cyber", "dynamic", "efficient", "fluent", "geared", "hyper", "instant",
    "keen", "luminous", "mighty", "nimble", "optimum", "proactive", "quick", "rapid", "swift",
    "ultra", "vivid", "witty", "xenial", "youthful", "zealous",
];

const NOUNS: &[&str] = &[
    "chronos", "hyperion", "aether", "quanta", "nebula", "vortex", "zenith", "pulsar", "nova",
    "orion", "stratus", "nimbus", "cosmos", "eclipse", "helix", "photon", "spectra", "aurora",
    "terra", "quasar", "solstice", "astro", "comet", "lunar", "atlas", "titan", "galaxy",
    "horizon", "mistral", "phoenix", "meteor", "plasma", "echo", "stellar", "fusion", "halo",
    "zephyr", "draco", "equinox", "falcon",
];

/// One entry of an instance's IP allow list.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CidrBlock {
    pub cidr_block: String,
    pub description: String,
}

impl CidrBlock {
    /// `0.0.0.0/0`, reachable from anywhere.
    pub fn everywhere() -> Self {
        Self {
            cidr_block: "0.0.0.0/0".to_string(),
            description: "Everywhere".to_string(),
        }
    }
}

/// The `[database]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseSpec {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub database_name: Option<String>,
    #[serde(default)]
    pub database_user: Option<String>,
    #[serde(default)]
    pub enable_high_availability: bool,
    pub plan: String,
    pub version: String,
    #[serde(default)]
    pub cidr_blocks: Vec<CidrBlock>,
}

impl DatabaseSpec {
    /// Build the `POST /postgres` body for `owner_id`.
    pub fn to_request(&self, owner_id: &str) -> PostgresRequest {
        PostgresRequest {
            name: self.name.clone().unwrap_or_default(),
            owner_id: owner_id.to_string(),
            plan: self.plan.clone(),
            version: self.version.clone(),
            database_name: self.database_name.clone(),
            database_user: self.database_user.clone(),
            enable_high_availability: self.enable_high_availability,
            ip_allow_list: self.cidr_blocks.clone(),
        }
    }
}

/// The `[redis]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RedisSpec {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub plan: String,
    #[serde(default)]
    pub cidr_blocks: Vec<CidrBlock>,
}

impl RedisSpec {
    /// Build the `POST /redis` body for `owner_id`.
    pub fn to_request(&self, owner_id: &str) -> RedisRequest {
        RedisRequest {
            name: self.name.clone().unwrap_or_default(),
            owner_id: owner_id.to_string(),
            plan: self.plan.clone(),
            ip_allow_list: self.cidr_blocks.clone(),
        }
    }
}

/// A parsed deployment file.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct DeployConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redis: Option<RedisSpec>,
}

impl DeployConfig {
    /// Read and parse a deployment file, then fill blank values.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidDeployConfig`] if the file cannot be read,
    /// is not valid TOML, or has neither section.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ClientError::InvalidDeployConfig(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::parse(&contents)
    }

    /// Parse deployment TOML and fill blank values.
    pub fn parse(contents: &str) -> Result<Self> {
        let mut config: DeployConfig = toml::from_str(contents)
            .map_err(|e| ClientError::InvalidDeployConfig(e.message().to_string()))?;

        if config.is_empty() {
            return Err(ClientError::InvalidDeployConfig(
                "no [database] or [redis] section".to_string(),
            ));
        }

        config.populate_blank_values();
        Ok(config)
    }

    /// Whether the file declares nothing to deploy.
    pub fn is_empty(&self) -> bool {
        self.database.is_none() && self.redis.is_none()
    }

    /// Replace blank names, empty allow lists, and a blank Redis plan.
    ///
    /// An instance name that is absent or blank gets a generated one. The
    /// database name and user are generated only when given as `""`; when
    /// absent the server picks them.
    pub fn populate_blank_values(&mut self) {
        if let Some(database) = self.database.as_mut() {
            fill_name(&mut database.name);
            fill_if_blank(&mut database.database_name);
            fill_if_blank(&mut database.database_user);
            if database.cidr_blocks.is_empty() {
                database.cidr_blocks.push(CidrBlock::everywhere());
            }
        }

        if let Some(redis) = self.redis.as_mut() {
            fill_name(&mut redis.name);
            if redis.cidr_blocks.is_empty() {
                redis.cidr_blocks.push(CidrBlock::everywhere());
            }
            if redis.plan.trim().is_empty() {
                redis.plan = DEFAULT_REDIS_PLAN.to_string();
            }
        }
    }
}

/// What a deployment created. A section absent from the file stays `None`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DeploymentReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postgres: Option<Postgres>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redis: Option<Redis>,
}

/// Generate an instance name such as `swiftnebula`.
pub fn generate_name() -> String {
    let adjective = ADJECTIVES[rand::random::<u32>() as usize % ADJECTIVES.len()];
    let noun = NOUNS[rand::random::<u32>() as usize % NOUNS.len()];
    format!("{}{}", adjective, noun)
}

fn fill_name(name: &mut Option<String>) {
    if name.as_deref().is_none_or(|n| n.trim().is_empty()) {
        *name = Some(generate_name());
    }
}

fn fill_if_blank(value: &mut Option<String>) {
    if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
        *value = Some(generate_name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fills_blank_values() {
        let config = DeployConfig::parse(
            r#"
            [database]
            name = ""
            databaseName = ""
            plan = "basic_256mb"
            version = "16"

            [redis]
            name = "sessions"
            "#,
        )
        .unwrap();

        let database = config.database.unwrap();
        assert!(!database.name.as_deref().unwrap().is_empty());
        assert!(!database.database_name.as_deref().unwrap().is_empty());
        assert_eq!(database.database_user, None);
        assert_eq!(database.cidr_blocks, vec![CidrBlock::everywhere()]);
        assert!(!database.enable_high_availability);

        let redis = config.redis.unwrap();
        assert_eq!(redis.name.as_deref(), Some("sessions"));
        assert_eq!(redis.plan, "starter");
        assert_eq!(redis.cidr_blocks, vec![CidrBlock::everywhere()]);
    }

    #[test]
    fn test_parse_keeps_given_values() {
        let config = DeployConfig::parse(
            r#"
            [redis]
            name = "cache"
            plan = "pro"
            cidrBlocks = [{ cidrBlock = "10.0.0.0/8", description = "office" }]
            "#,
        )
        .unwrap();

        let redis = config.redis.unwrap();
        assert_eq!(redis.plan, "pro");
        assert_eq!(redis.cidr_blocks.len(), 1);
        assert_eq!(redis.cidr_blocks[0].cidr_block, "10.0.0.0/8");
        assert!(config.database.is_none());
    }

    #[test]
    fn test_parse_rejects_empty_file() {
        let err = DeployConfig::parse("").unwrap_err();
        assert!(matches!(err, ClientError::InvalidDeployConfig(_)));
    }

    #[test]
    fn test_parse_rejects_invalid_toml() {
        let err = DeployConfig::parse("[database\nplan = ").unwrap_err();
        assert!(matches!(err, ClientError::InvalidDeployConfig(_)));
    }

    #[test]
    fn test_database_requires_plan_and_version() {
        let err = DeployConfig::parse("[database]\nname = \"db\"\n").unwrap_err();
        assert!(matches!(err, ClientError::InvalidDeployConfig(_)));
    }

    #[test]
    fn test_to_request_carries_owner() {
        let config = DeployConfig::parse("[redis]\nname = \"cache\"\n").unwrap();
        let request = config.redis.unwrap().to_request("tea-1");
        assert_eq!(request.owner_id, "tea-1");
        assert_eq!(request.name, "cache");
        assert_eq!(request.plan, "starter");
    }

    #[test]
    fn test_generated_names_are_lowercase_words() {
        for _ in 0..20 {
            let name = generate_name();
            assert!(!name.is_empty());
            assert!(name.chars().all(|c| c.is_ascii_lowercase()));
        }
    }
}
