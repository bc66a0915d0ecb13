//! Datastore provisioning methods for [`RenderClient`].
//!
//! # What this module handles:
//! - Creating Postgres and Redis instances from typed request bodies
//! - Deploying every instance a TOML deployment file declares
//!
//! # What this module does NOT handle:
//! - Parsing and defaulting deployment files (in [`crate::models::deploy`])
//!
//! # Invariants
//! - Postgres is created before Redis; the first failure stops the deployment
//! - The owner id is resolved once from the configured owner email

use std::path::Path;

use tracing::info;

use crate::client::RenderClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{DeployConfig, DeploymentReport, Postgres, PostgresRequest, Redis, RedisRequest};

impl RenderClient {
    /// Create a Postgres instance and return it.
    pub async fn create_postgres(&self, request: &PostgresRequest) -> Result<Postgres> {
        let postgres = endpoints::create_postgres(
            &self.http,
            &self.base_url,
            self.api_key(),
            request,
            self.timeout,
        )
        .await?;
        info!(id = %postgres.id, name = %postgres.name, "Created postgres instance");
        Ok(postgres)
    }

    /// Create a Redis instance and return it.
    pub async fn create_redis(&self, request: &RedisRequest) -> Result<Redis> {
        let redis = endpoints::create_redis(
            &self.http,
            &self.base_url,
            self.api_key(),
            request,
            self.timeout,
        )
        .await?;
        info!(id = %redis.id, name = %redis.name, "Created redis instance");
        Ok(redis)
    }

    /// Read a TOML deployment file and create every instance it declares.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidDeployConfig`] if the file is unreadable, malformed, or empty
    /// - [`ClientError::MissingOwnerCredentials`] if no owner email is configured
    /// - [`ClientError::NotFound`] if the owner email matches no authorized owner
    pub async fn deploy_configuration(&self, path: impl AsRef<Path>) -> Result<DeploymentReport> {
        let config = DeployConfig::read(path)?;
        self.deploy(&config).await
    }

    /// Create every instance in an already parsed deployment.
    pub async fn deploy(&self, config: &DeployConfig) -> Result<DeploymentReport> {
        if config.is_empty() {
            return Err(ClientError::InvalidDeployConfig(
                "no [database] or [redis] section".to_string(),
            ));
        }

        let email = self
            .owner_credentials()
            .filter(|email| !email.trim().is_empty())
            .ok_or(ClientError::MissingOwnerCredentials)?;
        let owner_id = self.resolve_owner_id(email).await?;

        let mut report = DeploymentReport::default();
        if let Some(database) = &config.database {
            report.postgres = Some(self.create_postgres(&database.to_request(&owner_id)).await?);
        }
        if let Some(redis) = &config.redis {
            report.redis = Some(self.create_redis(&redis.to_request(&owner_id)).await?);
        }
        Ok(report)
    }
}
