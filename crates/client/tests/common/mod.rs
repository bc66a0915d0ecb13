//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Mock servers stand in for `https://api.render.com`; clients point at `{uri}/v1`
//!
//! # What this does NOT handle
//! - Mock expectations (use wiremock directly in tests)

use std::time::Duration;

#[allow(unused_imports)]
pub use render_client::testing::load_fixture;

#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use render_client::{ClientError, RenderClient, endpoints};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "rnd_test_key";

/// Base URL of the mock server including the API version prefix.
#[allow(dead_code)]
pub fn api_base(server: &MockServer) -> String {
    format!("{}/v1", server.uri())
}

/// A client pointed at `server` with a short timeout and a default limit of 100.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> RenderClient {
    RenderClient::builder()
        .base_url(api_base(server))
        .api_key(secrecy::SecretString::new(TEST_API_KEY.to_string().into()))
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client should build")
}

/// Count how often `key` occurs in the query of every request the server saw.
#[allow(dead_code)]
pub async fn query_key_counts(server: &MockServer, key: &str) -> Vec<usize> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| request.url.query_pairs().filter(|(k, _)| k == key).count())
        .collect()
}
