//! Secret methods.

use secrecy::SecretString;

use crate::client::DsmClient;
use crate::endpoints;
use crate::error::Result;

impl DsmClient {
    /// Get the decoded database password of a deployment.
    pub async fn get_secret_password(&self, deployment_name: &str) -> Result<SecretString> {
        endpoints::get_secret_password(&self.http, &self.base_url, self.headers()?, deployment_name)
            .await
    }
}
