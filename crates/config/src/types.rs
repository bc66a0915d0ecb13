//! Configuration types for the Render client.
//!
//! Responsibilities:
//! - Define connection settings (base URL, request timeout).
//! - Define authentication settings (API key, owner credentials).
//! - Combine both into the validated `Config` produced by `ConfigLoader::build()`.
//!
//! Does NOT handle:
//! - Reading `.env` files or environment variables (see `loader` module).
//! - Performing requests (see the client crate).
//!
//! Invariants:
//! - The API key is always a `SecretString` and never appears in `Debug` output.
//! - Duration fields serialize as whole seconds.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_LIST_LIMIT, DEFAULT_TIMEOUT_SECS};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection settings for the Render REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL including the version prefix (e.g., https://api.render.com/v1)
    pub base_url: String,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Authentication settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Bearer token sent in the `Authorization` header.
    #[serde(with = "secret_string")]
    pub api_key: SecretString,
    /// Email address of the owner account, used for owner lookups.
    #[serde(default)]
    pub owner_credentials: Option<String>,
}

/// Validated configuration for a Render client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
    /// Value sent as `limit` on list calls that do not specify one.
    pub default_limit: u32,
}

impl Config {
    /// Create a config with the given API key and default connection settings.
    pub fn with_api_key(api_key: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::default(),
            auth: AuthConfig {
                api_key,
                owner_credentials: None,
            },
            default_limit: DEFAULT_LIST_LIMIT,
        }
    }
}
