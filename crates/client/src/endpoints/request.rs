//! Single-attempt HTTP request execution.
//!
//! Every DSM call goes through [`send_request`], which sends the request once,
//! propagates the current trace context, and turns non-success statuses into
//! [`ClientError::ApiError`]. Failed requests are never retried.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::tracing::inject_trace_context;

/// Sends an HTTP request and returns the response for 2xx statuses.
///
/// # Errors
///
/// Returns `ClientError::HttpError` for connection, DNS and TLS failures and
/// `ClientError::ApiError` (with the response body as message) for any
/// non-success status.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = inject_trace_context(builder).send().await?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());
    let message = if body.trim().is_empty() {
        response_reason(status)
    } else {
        body
    };

    debug!(status, url = %url, "DSM request failed");

    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}

fn response_reason(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown status")
        .to_string()
}
