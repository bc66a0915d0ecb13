//! REST API endpoint implementations.
//!
//! Each function maps one Render endpoint to one request: build the URL,
//! attach the `Accept` and bearer `Authorization` headers, send once, and
//! decode. Connection settings are passed in explicitly.

mod datastores;
mod owners;
mod request;
mod services;
pub mod url_encoding;

pub use datastores::{create_postgres, create_redis};
pub use owners::list_authorized_users;
pub use request::{decode_json, send_request};
pub use services::{create_service, delete_service, list_services, service_query_params};
pub use url_encoding::encode_path_segment;
