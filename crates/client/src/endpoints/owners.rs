//! Owner endpoints.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::endpoints::{decode_json, send_request};
use crate::error::Result;
use crate::models::OwnerResponse;

/// List the owners authorized by `api_key` and keep those whose email is `email`.
///
/// The comparison is exact and case-sensitive. Server order is preserved.
pub async fn list_authorized_users(
    client: &Client,
    base_url: &str,
    api_key: &str,
    email: &str,
    limit: u32,
    timeout: Duration,
) -> Result<Vec<OwnerResponse>> {
    let url = format!("{}/owners", base_url);
    debug!(%url, limit, "Listing owners");

    let builder = client
        .get(&url)
        .header("Accept", "application/json")
        .header("Authorization", format!("Bearer {}", api_key))
        .query(&[("limit", limit.to_string())]);

    let response = send_request(builder, StatusCode::OK, timeout).await?;
    let owners: Vec<OwnerResponse> = decode_json(response, "owners list", timeout).await?;

    Ok(filter_by_email(owners, email))
}

fn filter_by_email(owners: Vec<OwnerResponse>, email: &str) -> Vec<OwnerResponse> {
    owners
        .into_iter()
        .filter(|entry| entry.owner.email == email)
        .collect()
}
