//! Connection-string assembly.

use tracing::info;

use crate::client::DsmClient;
use crate::error::Result;
use crate::models::{ConnectionInputs, ConnectionString};

impl DsmClient {
    /// Build the connection string for a provisioned deployment.
    ///
    /// Fetches the cluster endpoint, then the secret, then joins them with the
    /// caller's inputs. The first failing step aborts the whole operation.
    pub async fn get_db_connection_string(
        &self,
        inputs: &ConnectionInputs,
    ) -> Result<ConnectionString> {
        let endpoint = self
            .get_cluster_connection_info(inputs.engine(), inputs.deployment_name())
            .await?;
        info!(
            deployment = inputs.deployment_name(),
            host = %endpoint.host,
            port = %endpoint.port,
            "Resolved cluster endpoint"
        );

        let password = self.get_secret_password(inputs.deployment_name()).await?;

        let connection = ConnectionString::assemble(inputs, &endpoint, &password);
        info!(connection = connection.redacted(), "Assembled connection string");
        Ok(connection)
    }
}
