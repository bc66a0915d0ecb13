//! Error types for the Render client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Render client operations.
///
/// Every accessor either succeeds or returns one of these; no failure is
/// converted into an empty list or a boolean flag.
#[derive(Error, Debug)]
pub enum ClientError {
    /// No API key was configured. Raised before any request is attempted.
    #[error("API key is required. Set API_KEY or pass an API key to the client builder")]
    MissingApiKey,

    /// Transport failure (DNS, connect, TLS, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The request exceeded the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The server answered with a status other than the endpoint's success code.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The response body was not the JSON shape the endpoint documents.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Encoding a request body failed.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A list `limit` outside the range the API accepts.
    #[error("Invalid limit '{0}': must be between 1 and 100")]
    InvalidLimit(String),

    /// A deployment file could not be read, parsed, or declares nothing.
    #[error("Invalid deployment file: {0}")]
    InvalidDeployConfig(String),

    /// An operation needs the owner email and none was configured.
    #[error("Owner email is required. Set OWNER_CREDENTIALS or pass it to the client builder")]
    MissingOwnerCredentials,

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A lookup by name, type, or email matched nothing.
    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl ClientError {
    /// HTTP status carried by this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error means the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::ApiError { status: 404, .. }
        )
    }

    /// Check if this error indicates rejected credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::MissingApiKey | Self::ApiError { status: 401 | 403, .. }
        )
    }

    /// Check if this error was raised before any response was received.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::HttpError(_) | Self::Timeout(_))
    }
}
