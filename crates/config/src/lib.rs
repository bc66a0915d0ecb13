//! Configuration management for the Render client.
//!
//! This crate provides types and loaders for managing Render API
//! credentials and connection settings from `.env` files and
//! environment variables.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, Credentials, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig};
