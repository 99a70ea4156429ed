//! Authentication endpoints.

use dsm_config::constants::LOGIN_PATH;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use tracing::debug;

use crate::auth::parse_bearer_token;
use crate::endpoints::send_request;
use crate::error::Result;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Login to DSM with email and password, returning the bearer token.
pub async fn login(client: &Client, base_url: &str, username: &str, password: &str) -> Result<String> {
    debug!("Logging in to DSM as {}", username);

    let url = format!("{}{}", base_url, LOGIN_PATH);
    let builder = client.post(&url).json(&LoginRequest {
        email: username,
        password,
    });
    let response = send_request(builder).await?;

    let header = response
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    parse_bearer_token(header)
}
