//! Database engine families supported by DSM.

use std::fmt;
use std::str::FromStr;

use dsm_config::constants::MYSQL_APP_DATABASE;

use crate::error::ClientError;

/// Database engine of a DSM deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseEngine {
    Postgres,
    Mysql,
}

impl DatabaseEngine {
    /// Lower-case engine name, as used in connection-string schemes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Mysql => "mysql",
        }
    }

    /// Kubernetes collection that holds clusters of this engine.
    pub fn cluster_collection(&self) -> &'static str {
        match self {
            Self::Postgres => "postgresclusters",
            Self::Mysql => "mysqlclusters",
        }
    }

    /// Database name to connect to for a deployment.
    ///
    /// Postgres deployments expose a database named after the deployment;
    /// MySQL deployments always expose the application database.
    pub fn database_name<'a>(&self, deployment_name: &'a str) -> &'a str {
        match self {
            Self::Postgres => deployment_name,
            Self::Mysql => MYSQL_APP_DATABASE,
        }
    }

    /// Map any engine name onto an engine family: `postgres` is Postgres,
    /// everything else is treated as MySQL.
    pub fn from_legacy_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("postgres") {
            Self::Postgres
        } else {
            Self::Mysql
        }
    }
}

impl FromStr for DatabaseEngine {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" => Ok(Self::Postgres),
            "mysql" => Ok(Self::Mysql),
            _ => Err(ClientError::UnsupportedEngine(s.to_string())),
        }
    }
}

impl fmt::Display for DatabaseEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
