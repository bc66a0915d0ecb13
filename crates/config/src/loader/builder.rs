//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration.
//! - Load `.env` files from the working directory or an explicit path.
//! - Build and validate the final `Config`.
//! - Expose the raw, never-failing `Credentials` lookup.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Later calls win: `from_env()` followed by `with_*` lets the builder override env.
//! - `load_dotenv()` never overrides variables already present in the process.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy` is called.
//! - A missing API key is reported by `build()`, never deferred to request time.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

use super::env::{apply_env, env_var_or_none};
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_LIST_LIMIT, DEFAULT_TIMEOUT_SECS, ENV_API_KEY,
    ENV_DOTENV_DISABLED, ENV_OWNER_CREDENTIALS, MAX_LIST_LIMIT, MAX_TIMEOUT_SECS,
};
use crate::types::{AuthConfig, Config, ConnectionConfig};

/// Raw credential values as found in the environment.
///
/// Unset variables are represented by empty strings; callers decide whether
/// an empty value is acceptable.
#[derive(Clone)]
pub struct Credentials {
    pub api_key: SecretString,
    pub owner_credentials: String,
}

impl Credentials {
    /// Read `API_KEY` and `OWNER_CREDENTIALS` from the process environment.
    ///
    /// Never fails. Each missing value is logged at `warn` level and left empty.
    pub fn from_env() -> Self {
        let api_key = env_var_or_none(ENV_API_KEY).unwrap_or_else(|| {
            warn!("{} is not set", ENV_API_KEY);
            String::new()
        });
        let owner_credentials = env_var_or_none(ENV_OWNER_CREDENTIALS).unwrap_or_else(|| {
            warn!("{} is not set", ENV_OWNER_CREDENTIALS);
            String::new()
        });

        Self {
            api_key: SecretString::new(api_key.into()),
            owner_credentials,
        }
    }

    /// Whether an API key was found.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("owner_credentials", &self.owner_credentials)
            .finish()
    }
}

/// Configuration loader that builds config from `.env` files, the environment,
/// and explicit overrides.
#[derive(Default)]
pub struct ConfigLoader {
    api_key: Option<SecretString>,
    owner_credentials: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    default_limit: Option<u32>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from `.env` in the current directory, if present.
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// # Errors
    ///
    /// - `ConfigError::DotenvParse` if the file exists but has invalid syntax
    /// - `ConfigError::DotenvIo` if the file exists but cannot be read
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }
        Self::map_dotenv_result(dotenvy::dotenv().map(|_| ()))?;
        Ok(self)
    }

    /// Load environment variables from a specific dotenv file, if present.
    ///
    /// Same error and `DOTENV_DISABLED` semantics as [`ConfigLoader::load_dotenv`].
    pub fn load_dotenv_from(self, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }
        Self::map_dotenv_result(dotenvy::from_path(path.as_ref()))?;
        Ok(self)
    }

    /// Translate a dotenvy result without ever echoing file contents.
    fn map_dotenv_result(result: Result<(), dotenvy::Error>) -> Result<(), ConfigError> {
        match result {
            Ok(()) => Ok(()),
            Err(e) if Self::is_not_found(&e) => Ok(()),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: String) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set the owner credentials (owner email address).
    pub fn with_owner_credentials(mut self, owner: String) -> Self {
        self.owner_credentials = Some(owner);
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the default list limit.
    pub fn with_default_limit(mut self, limit: u32) -> Self {
        self.default_limit = Some(limit);
        self
    }

    pub(crate) fn set_api_key(&mut self, key: Option<SecretString>) {
        self.api_key = key;
    }

    pub(crate) fn set_owner_credentials(&mut self, owner: Option<String>) {
        self.owner_credentials = owner;
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_default_limit(&mut self, limit: Option<u32>) {
        self.default_limit = limit;
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = validate_and_normalize_base_url(
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        )?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        validate_timeout(timeout)?;

        let default_limit = self.default_limit.unwrap_or(DEFAULT_LIST_LIMIT);
        if default_limit == 0 || default_limit > MAX_LIST_LIMIT {
            return Err(ConfigError::InvalidLimit {
                message: format!(
                    "must be between 1 and {} (got {})",
                    MAX_LIST_LIMIT, default_limit
                ),
            });
        }

        Ok(Config {
            connection: ConnectionConfig { base_url, timeout },
            auth: AuthConfig {
                api_key,
                owner_credentials: self.owner_credentials,
            },
            default_limit,
        })
    }
}

/// Validate that the base URL is an absolute http(s) URL and strip trailing slashes.
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let parsed = url::Url::parse(raw).map_err(|e| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            message: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    Ok(raw.trim_end_matches('/').to_string())
}

fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let secs = timeout.as_secs();
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            message: "timeout must be greater than 0 seconds".to_string(),
        });
    }
    if secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!(
                "timeout exceeds maximum allowed value of {} seconds",
                MAX_TIMEOUT_SECS
            ),
        });
    }
    Ok(())
}
