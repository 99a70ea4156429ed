//! Generic authenticated GET returning JSON.

use reqwest::Client;
use reqwest::header::HeaderMap;
use tracing::debug;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};

/// GET `{base_url}{path}` with the given session headers and parse the body as JSON.
pub async fn get_json(
    client: &Client,
    base_url: &str,
    headers: HeaderMap,
    path: &str,
) -> Result<serde_json::Value> {
    let url = format!("{}{}", base_url, path);
    debug!(url = %url, "GET");

    let builder = client.get(&url).headers(headers);
    let response = send_request(builder).await?;

    let body = response.bytes().await?;
    serde_json::from_slice(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("{path} did not return JSON: {e}")))
}
