//! Service management methods for [`RenderClient`].
//!
//! # What this module handles:
//! - Listing services with free-form filters and the common shorthands
//! - Creating services from raw JSON or a [`ServiceTemplate`]
//! - Deleting services by id or by name and type
//!
//! # What this module does NOT handle:
//! - Low-level service endpoint HTTP calls (in [`crate::endpoints`])
//! - Query construction (in [`crate::endpoints::service_query_params`])

use tracing::info;

use crate::client::{RenderClient, check_limit};
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{Service, ServiceFilters, ServiceTemplate};

impl RenderClient {
    /// List services matching `filters`.
    ///
    /// A `limit` in `filters` replaces the client's default limit.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidLimit`] before any request when the
    /// filter's `limit` is not a number in `1..=100`.
    pub async fn list_services(&self, filters: &ServiceFilters) -> Result<Vec<Service>> {
        if let Some(limit) = filters.get("limit") {
            check_limit(limit)?;
        }
        endpoints::list_services(
            &self.http,
            &self.base_url,
            self.api_key(),
            filters,
            self.default_limit,
            self.timeout,
        )
        .await
    }

    /// List services without any filter.
    pub async fn list_all_services(&self, limit: u32) -> Result<Vec<Service>> {
        self.list_services(&ServiceFilters::new().limit(limit)).await
    }

    /// List services by suspension status (`suspended` or `not_suspended`).
    pub async fn list_services_with_status(
        &self,
        status: &str,
        limit: u32,
    ) -> Result<Vec<Service>> {
        self.list_services(&ServiceFilters::new().suspended(status).limit(limit))
            .await
    }

    /// Find services with the given name and type.
    pub async fn find_service_by_name_and_type(
        &self,
        name: &str,
        service_type: &str,
    ) -> Result<Vec<Service>> {
        self.list_services(&ServiceFilters::new().name(name).service_type(service_type))
            .await
    }

    /// Find services deployed in `region`.
    pub async fn find_service_by_region(&self, region: &str, limit: u32) -> Result<Vec<Service>> {
        self.list_services(&ServiceFilters::new().region(region).limit(limit))
            .await
    }

    /// Find services running in the runtime environment `env` (e.g. `docker`).
    pub async fn find_service_by_environment(
        &self,
        env: &str,
        limit: u32,
    ) -> Result<Vec<Service>> {
        self.list_services(&ServiceFilters::new().env(env).limit(limit))
            .await
    }

    /// Create a service from a raw JSON body and return it.
    pub async fn create_service(&self, body: &serde_json::Value) -> Result<Service> {
        let service = endpoints::create_service(
            &self.http,
            &self.base_url,
            self.api_key(),
            body,
            self.timeout,
        )
        .await?;
        info!(id = %service.id, name = %service.name, "Created service");
        Ok(service)
    }

    /// Create a service from a typed template.
    pub async fn create_service_from_template(
        &self,
        template: &ServiceTemplate,
    ) -> Result<Service> {
        let body = serde_json::to_value(template)?;
        self.create_service(&body).await
    }

    /// Delete a service by id.
    pub async fn delete_service(&self, service_id: &str) -> Result<()> {
        endpoints::delete_service(
            &self.http,
            &self.base_url,
            self.api_key(),
            service_id,
            self.timeout,
        )
        .await?;
        info!(id = %service_id, "Deleted service");
        Ok(())
    }

    /// Delete the first service with this name and type. Returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] when nothing matches.
    pub async fn delete_service_by_name_and_type(
        &self,
        name: &str,
        service_type: &str,
    ) -> Result<String> {
        let service = self
            .find_service_by_name_and_type(name, service_type)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                ClientError::NotFound(format!("{} service named '{}'", service_type, name))
            })?;

        self.delete_service(&service.id).await?;
        Ok(service.id)
    }
}
