//! Service endpoints.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::endpoints::{decode_json, encode_path_segment, send_request};
use crate::error::{ClientError, Result};
use crate::models::{Service, ServiceFilters, ServiceResponse};

const INCLUDE_PREVIEWS: &str = "includePreviews";

/// Build the query for `GET /services`.
///
/// `includePreviews` comes first (the filter's own value if it has one,
/// otherwise `true`), then `limit` (the filter's own value if it has one,
/// otherwise `default_limit`), then the remaining filters in insertion order.
/// Both fixed keys therefore appear exactly once.
pub fn service_query_params(
    filters: &ServiceFilters,
    default_limit: u32,
) -> Vec<(String, String)> {
    let include_previews = filters.get(INCLUDE_PREVIEWS).unwrap_or("true").to_string();
    let limit = filters
        .get("limit")
        .map(str::to_string)
        .unwrap_or_else(|| default_limit.to_string());

    let mut params = vec![
        (INCLUDE_PREVIEWS.to_string(), include_previews),
        ("limit".to_string(), limit),
    ];
    params.extend(
        filters
            .iter()
            .filter(|(key, _)| *key != "limit" && *key != INCLUDE_PREVIEWS)
            .map(|(key, value)| (key.to_string(), value.to_string())),
    );
    params
}

/// List services matching `filters`.
pub async fn list_services(
    client: &Client,
    base_url: &str,
    api_key: &str,
    filters: &ServiceFilters,
    default_limit: u32,
    timeout: Duration,
) -> Result<Vec<Service>> {
    let url = format!("{}/services", base_url);
    let query = service_query_params(filters, default_limit);
    debug!(%url, ?query, "Listing services");

    let builder = client
        .get(&url)
        .header("Accept", "application/json")
        .header("Authorization", format!("Bearer {}", api_key))
        .query(&query);

    let response = send_request(builder, StatusCode::OK, timeout).await?;
    let entries: Vec<ServiceResponse> = decode_json(response, "services list", timeout).await?;

    Ok(entries.into_iter().map(|entry| entry.service).collect())
}

/// Create response body. Render wraps the service; some deployments answer bare.
#[derive(Deserialize)]
#[serde(untagged)]
enum CreatedService {
    Wrapped { service: Service },
    Bare(Service),
}

/// Create a service from a JSON body and return the created service.
///
/// The body is sent as-is; its schema is owned by the API.
pub async fn create_service(
    client: &Client,
    base_url: &str,
    api_key: &str,
    body: &serde_json::Value,
    timeout: Duration,
) -> Result<Service> {
    let url = format!("{}/services", base_url);
    debug!(%url, "Creating service");

    let payload = serde_json::to_vec(body)?;
    let builder = client
        .post(&url)
        .header("Accept", "application/json")
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {}", api_key))
        .body(payload);

    let response = send_request(builder, StatusCode::CREATED, timeout).await?;
    let created: CreatedService = decode_json(response, "created service", timeout).await?;

    Ok(match created {
        CreatedService::Wrapped { service } | CreatedService::Bare(service) => service,
    })
}

/// Delete a service by id.
pub async fn delete_service(
    client: &Client,
    base_url: &str,
    api_key: &str,
    service_id: &str,
    timeout: Duration,
) -> Result<()> {
    if service_id.is_empty() {
        return Err(ClientError::InvalidUrl(
            "service id must not be empty".to_string(),
        ));
    }

    let url = format!("{}/services/{}", base_url, encode_path_segment(service_id));
    debug!(%url, "Deleting service");

    let builder = client
        .delete(&url)
        .header("Accept", "application/json")
        .header("Authorization", format!("Bearer {}", api_key));

    send_request(builder, StatusCode::NO_CONTENT, timeout).await?;
    Ok(())
}
