//! Cluster status models for the DSM databases API.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::string_from_number_or_string;

/// Where a provisioned database cluster accepts connections.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ClusterConnectionInfo {
    pub host: String,
    /// Port as reported by DSM; numbers are rendered as text.
    #[serde(deserialize_with = "string_from_number_or_string")]
    pub port: String,
}

/// Cluster resource as returned by
/// `/apis/databases.dataservices.vmware.com/v1alpha1/namespaces/default/{collection}/{name}`.
///
/// Only the fields needed to connect are modelled; everything else is ignored.
#[derive(Debug, Deserialize)]
pub struct ClusterResource {
    pub status: ClusterStatus,
}

#[derive(Debug, Deserialize)]
pub struct ClusterStatus {
    pub connection: ClusterConnectionInfo,
}
