//! Centralized constants for the Render workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default Render REST API base URL, including the version prefix.
pub const DEFAULT_BASE_URL: &str = "https://api.render.com/v1";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// List Defaults
// =============================================================================

/// Default `limit` query parameter for list endpoints.
pub const DEFAULT_LIST_LIMIT: u32 = 100;

/// Largest page size the Render API accepts for a `limit` parameter.
pub const MAX_LIST_LIMIT: u32 = 100;

// =============================================================================
// Environment Variable Names
// =============================================================================

/// Bearer token used for every request.
pub const ENV_API_KEY: &str = "API_KEY";

/// Email address identifying the owner account to operate on.
pub const ENV_OWNER_CREDENTIALS: &str = "OWNER_CREDENTIALS";

/// Override for [`DEFAULT_BASE_URL`].
pub const ENV_BASE_URL: &str = "RENDER_BASE_URL";

/// Override for [`DEFAULT_TIMEOUT_SECS`].
pub const ENV_TIMEOUT: &str = "RENDER_TIMEOUT";

/// Override for [`DEFAULT_LIST_LIMIT`].
pub const ENV_DEFAULT_LIMIT: &str = "RENDER_DEFAULT_LIMIT";

/// When set to `1` or `true`, `.env` loading is skipped.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
