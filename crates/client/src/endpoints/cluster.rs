//! Database cluster status endpoints.

use dsm_config::constants::{DB_GROUP, DB_VERSION, DEFAULT_NAMESPACE};
use reqwest::Client;
use reqwest::header::HeaderMap;

use crate::endpoints::get_json;
use crate::error::{ClientError, Result};
use crate::models::{ClusterConnectionInfo, ClusterResource, DatabaseEngine};

/// Path of a cluster resource, e.g.
/// `/apis/databases.dataservices.vmware.com/v1alpha1/namespaces/default/postgresclusters/mydb`.
pub fn cluster_path(engine: DatabaseEngine, deployment_name: &str) -> String {
    format!(
        "/apis/{}/{}/namespaces/{}/{}/{}",
        DB_GROUP,
        DB_VERSION,
        DEFAULT_NAMESPACE,
        engine.cluster_collection(),
        deployment_name
    )
}

/// Fetch the host and port a cluster accepts connections on.
pub async fn get_cluster_connection_info(
    client: &Client,
    base_url: &str,
    headers: HeaderMap,
    engine: DatabaseEngine,
    deployment_name: &str,
) -> Result<ClusterConnectionInfo> {
    let path = cluster_path(engine, deployment_name);
    let value = get_json(client, base_url, headers, &path).await?;

    let resource: ClusterResource = serde_json::from_value(value).map_err(|e| {
        ClientError::InvalidResponse(format!(
            "{} '{}' has no usable status.connection: {}",
            engine.cluster_collection(),
            deployment_name,
            e
        ))
    })?;

    Ok(resource.status.connection)
}
