//! Secret endpoints.

use dsm_config::constants::DEFAULT_NAMESPACE;
use reqwest::Client;
use reqwest::header::HeaderMap;
use secrecy::SecretString;

use crate::endpoints::get_json;
use crate::error::{ClientError, Result};
use crate::models::{decode_secret_password, encoded_password};

/// Path of a deployment's secret, e.g. `/api/v1/namespaces/default/secrets/mydb`.
pub fn secret_path(deployment_name: &str) -> String {
    format!(
        "/api/v1/namespaces/{}/secrets/{}",
        DEFAULT_NAMESPACE, deployment_name
    )
}

/// Fetch and decode the database password stored for a deployment.
pub async fn get_secret_password(
    client: &Client,
    base_url: &str,
    headers: HeaderMap,
    deployment_name: &str,
) -> Result<SecretString> {
    let secret = get_json(client, base_url, headers, &secret_path(deployment_name)).await?;

    let encoded = encoded_password(&secret).ok_or_else(|| {
        ClientError::InvalidResponse(format!(
            "secret '{}' has no data.password",
            deployment_name
        ))
    })?;

    decode_secret_password(encoded)
}
