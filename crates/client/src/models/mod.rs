//! Data models for Render API requests and responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod deploy;
pub mod owners;
pub mod postgres;
pub mod redis;
pub mod services;
pub mod templates;

pub use deploy::{CidrBlock, DatabaseSpec, DeployConfig, DeploymentReport, RedisSpec};
pub use owners::{Owner, OwnerResponse};
pub use postgres::{Postgres, PostgresRequest};
pub use redis::{Redis, RedisRequest};
pub use services::{Service, ServiceFilters, ServiceResponse};
pub use templates::{
    AutoScaling, BuildFilter, EnvSpecificDetails, EnvVar, Header, Image, Route, ScalingCriteria,
    SecretFile, ServiceDetails, ServiceTemplate, UtilizationTarget,
};
