//! Generic resource access.

use crate::client::DsmClient;
use crate::endpoints;
use crate::error::Result;

impl DsmClient {
    /// GET a DSM API path (e.g. `/api/v1/namespaces/default/secrets/mydb`) as JSON.
    pub async fn get_json(&self, path: &str) -> Result<serde_json::Value> {
        endpoints::get_json(&self.http, &self.base_url, self.headers()?, path).await
    }
}
