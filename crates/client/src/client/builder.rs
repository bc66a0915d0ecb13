//! Client builder for constructing [`RenderClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Rejecting a missing or blank API key before any request is made
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, redirects)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`RenderClient`] methods)
//! - Reading `.env` files or environment variables (see `render_config`)
//!
//! # Invariants
//! - `api_key` is required and must be non-blank before calling `build()`
//! - The base URL is always normalized to have no trailing slashes

use std::time::Duration;

use render_config::{
    Config,
    constants::{DEFAULT_BASE_URL, DEFAULT_LIST_LIMIT, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};
use secrecy::{ExposeSecret, SecretString};

use crate::client::{RenderClient, check_limit};
use crate::error::{ClientError, Result};

/// Builder for creating a new [`RenderClient`].
///
/// Everything except the API key has a default: the public Render API,
/// a 30 second timeout, and a list limit of 100.
pub struct RenderClientBuilder {
    base_url: String,
    api_key: Option<SecretString>,
    timeout: Duration,
    default_limit: u32,
    owner_credentials: Option<String>,
}

impl Default for RenderClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_limit: DEFAULT_LIST_LIMIT,
            owner_credentials: None,
        }
    }
}

impl RenderClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL, including the version prefix
    /// (e.g. `https://api.render.com/v1`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the bearer token.
    pub fn api_key(mut self, key: SecretString) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `limit` used by list calls that do not specify one.
    pub fn default_limit(mut self, limit: u32) -> Self {
        self.default_limit = limit;
        self
    }

    /// Set the owner email used for owner lookups.
    pub fn owner_credentials(mut self, email: impl Into<String>) -> Self {
        self.owner_credentials = Some(email.into());
        self
    }

    /// Create a client builder from a validated configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = config.connection.base_url.clone();
        self.api_key = Some(config.auth.api_key.clone());
        self.timeout = config.connection.timeout;
        self.default_limit = config.default_limit;
        self.owner_credentials = config.auth.owner_credentials.clone();
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://api.render.com/v1/"` -> `"https://api.render.com/v1"`
    /// - `"https://api.render.com/v1//"` -> `"https://api.render.com/v1"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`RenderClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingApiKey`] if no API key (or a blank one) was set.
    /// Returns [`ClientError::InvalidUrl`] if the base URL does not parse.
    /// Returns [`ClientError::InvalidLimit`] if the default limit is 0 or above 100.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<RenderClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or(ClientError::MissingApiKey)?;

        let base_url = Self::normalize_base_url(self.base_url);
        reqwest::Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        check_limit(&self.default_limit.to_string())?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        Ok(RenderClient {
            http,
            base_url,
            api_key,
            timeout: self.timeout,
            default_limit: self.default_limit,
            owner_credentials: self.owner_credentials,
        })
    }
}
