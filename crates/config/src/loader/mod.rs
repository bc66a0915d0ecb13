//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Load variable definitions from a `.env` file once, on request.
//! - Read Render credentials and connection settings from the environment.
//! - Provide a builder-pattern `ConfigLoader` for layering overrides.
//!
//! Does NOT handle:
//! - Performing any network call (see the client crate).
//!
//! Invariants / Assumptions:
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy` is called.
//! - Configuration errors surface from `build()`, before a client exists.

mod builder;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::{ConfigLoader, Credentials};
pub use env::env_var_or_none;
pub use error::ConfigError;
