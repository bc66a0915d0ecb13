//! Single-shot request execution and response decoding.
//!
//! Every Render endpoint documents exactly one success status. This module
//! sends a request once, with a per-request timeout, and turns anything other
//! than that status into a typed error carrying the status and body.
//!
//! Nothing here retries; a caller that wants retries wraps the
//! client call.

use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Error body shape returned by the Render API.
#[derive(Debug, Deserialize)]
struct RenderErrorBody {
    message: String,
}

/// Send a request and require `expected` as the response status.
///
/// # Errors
///
/// - `ClientError::Timeout` when the request exceeds `timeout`
/// - `ClientError::HttpError` for other transport failures
/// - `ClientError::ApiError` for any status other than `expected`
pub async fn send_request(
    builder: RequestBuilder,
    expected: StatusCode,
    timeout: Duration,
) -> Result<Response> {
    let response = builder
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| transport_error(e, timeout))?;

    let status = response.status();
    debug!(status = status.as_u16(), url = %response.url(), "Received response");

    if status == expected {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    // Render error bodies carry a `message`; fall back to the raw text.
    let message = match serde_json::from_str::<RenderErrorBody>(&body) {
        Ok(parsed) => parsed.message,
        Err(_) => body,
    };

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
    })
}

/// Read the full body and decode it as `T`.
///
/// `what` names the payload in the error message (e.g. "owners list").
/// The request timeout also covers the body download; elapsing it while
/// reading yields `ClientError::Timeout`.
pub async fn decode_json<T: DeserializeOwned>(
    response: Response,
    what: &str,
    timeout: Duration,
) -> Result<T> {
    let body = response
        .text()
        .await
        .map_err(|e| transport_error(e, timeout))?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse {}: {}", what, e)))
}

fn transport_error(error: reqwest::Error, timeout: Duration) -> ClientError {
    if error.is_timeout() {
        ClientError::Timeout(timeout)
    } else {
        ClientError::from(error)
    }
}
