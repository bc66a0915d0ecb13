//! Main Render REST API client and API methods.
//!
//! This module provides the primary [`RenderClient`] for the Render REST API.
//! The client holds connection settings and a bearer token; every method is
//! a single request against one endpoint.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `owners`: Owner lookup methods
//! - `services`: Service list, create, and delete methods
//! - `datastores`: Postgres and Redis provisioning
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Reading configuration from the environment (see `render_config`)
//!
//! # Invariants
//! - The client holds no mutable state; calls may run concurrently on `&self`
//! - Every request is bounded by the configured timeout
//! - Every `limit` sent to the server lies in `1..=MAX_LIST_LIMIT`
//! - Nothing is retried; callers decide how to handle a failed call

pub mod builder;

mod datastores;
mod owners;
mod services;

use std::time::Duration;

use render_config::constants::MAX_LIST_LIMIT;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{ClientError, Result};

/// Reject a list `limit` outside `1..=MAX_LIST_LIMIT`.
pub(crate) fn check_limit(limit: &str) -> Result<u32> {
    match limit.parse::<u32>() {
        Ok(value) if (1..=MAX_LIST_LIMIT).contains(&value) => Ok(value),
        _ => Err(ClientError::InvalidLimit(limit.to_string())),
    }
}

/// Render REST API client.
///
/// # Creating a Client
///
/// Use [`RenderClient::builder()`] to create a new client:
///
/// ```rust,no_run
/// use render_client::RenderClient;
/// use secrecy::SecretString;
///
/// # fn main() -> render_client::Result<()> {
/// let client = RenderClient::builder()
///     .api_key(SecretString::new("rnd_xxx".to_string().into()))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RenderClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_key: SecretString,
    pub(crate) timeout: Duration,
    pub(crate) default_limit: u32,
    pub(crate) owner_credentials: Option<String>,
}

impl RenderClient {
    /// Create a new client builder.
    pub fn builder() -> builder::RenderClientBuilder {
        builder::RenderClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `limit` sent on list calls that do not set one.
    pub fn default_limit(&self) -> u32 {
        self.default_limit
    }

    /// Owner email configured for this client, if any.
    pub fn owner_credentials(&self) -> Option<&str> {
        self.owner_credentials.as_deref()
    }

    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}
