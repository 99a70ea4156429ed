//! Cluster status methods.

use crate::client::DsmClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ClusterConnectionInfo, DatabaseEngine};

impl DsmClient {
    /// Get the host and port of a deployment's database cluster.
    pub async fn get_cluster_connection_info(
        &self,
        engine: DatabaseEngine,
        deployment_name: &str,
    ) -> Result<ClusterConnectionInfo> {
        endpoints::get_cluster_connection_info(
            &self.http,
            &self.base_url,
            self.headers()?,
            engine,
            deployment_name,
        )
        .await
    }
}
