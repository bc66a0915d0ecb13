//! Render REST API client.
//!
//! This crate provides a typed client for the Render Cloud REST API v1:
//! listing the owners an API key is authorized for, listing, creating,
//! and deleting services, and provisioning Postgres and Redis instances from
//! a TOML deployment file. Every call is one request with a bounded timeout
//! that returns either a decoded value or a [`ClientError`].

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::RenderClient;
pub use client::builder::RenderClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    DeployConfig, DeploymentReport, EnvVar, Owner, OwnerResponse, Postgres, PostgresRequest,
    Redis, RedisRequest, Service, ServiceDetails, ServiceFilters, ServiceResponse,
    ServiceTemplate,
};
