//! Postgres and Redis instance endpoints.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::endpoints::{decode_json, send_request};
use crate::error::Result;
use crate::models::{Postgres, PostgresRequest, Redis, RedisRequest};

/// Create a Postgres instance.
pub async fn create_postgres(
    client: &Client,
    base_url: &str,
    api_key: &str,
    request: &PostgresRequest,
    timeout: Duration,
) -> Result<Postgres> {
    create_instance(client, base_url, api_key, "postgres", request, timeout).await
}

/// Create a Redis instance.
pub async fn create_redis(
    client: &Client,
    base_url: &str,
    api_key: &str,
    request: &RedisRequest,
    timeout: Duration,
) -> Result<Redis> {
    create_instance(client, base_url, api_key, "redis", request, timeout).await
}

async fn create_instance<B: Serialize, T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    api_key: &str,
    resource: &str,
    body: &B,
    timeout: Duration,
) -> Result<T> {
    let url = format!("{}/{}", base_url, resource);
    debug!(%url, "Creating {} instance", resource);

    let payload = serde_json::to_vec(body)?;
    let builder = client
        .post(&url)
        .header("Accept", "application/json")
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {}", api_key))
        .body(payload);

    let response = send_request(builder, StatusCode::CREATED, timeout).await?;
    decode_json(response, resource, timeout).await
}
