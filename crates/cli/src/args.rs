//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments with `DSM_*` environment fallbacks.
//!
//! Non-responsibilities:
//! - Does not execute the lookup (see `main`).
//! - Does not validate the DSM host (see `dsm_config::ConfigLoader`).
//!
//! Invariants:
//! - Flag names keep the camelCase spelling used by existing automation
//!   (`--dsmHost`, `--dbEngine`, ...).

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "dsm-cli")]
#[command(
    about = "Print the connection string of a database provisioned by VMware Data Services Manager",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  dsm-cli --dsmHost dsm.example.com --username ops@example.com --password '***' \\\n          --dbEngine postgres --adminUsername pgadmin --deploymentName mydb\n  DSM_HOST=dsm.example.com DSM_USERNAME=ops@example.com DSM_PASSWORD='***' \\\n          dsm-cli --dbEngine mysql --adminUsername root --deploymentName orders --exit-codes\n"
)]
pub struct Cli {
    /// DSM host name, optionally with a port (e.g., dsm.example.com:443)
    #[arg(long = "dsmHost", env = "DSM_HOST", value_name = "HOST")]
    pub dsm_host: String,

    /// DSM login email
    #[arg(long, env = "DSM_USERNAME")]
    pub username: String,

    /// DSM login password
    #[arg(long, env = "DSM_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Database engine of the deployment (postgres or mysql)
    #[arg(long = "dbEngine", env = "DSM_DB_ENGINE", value_name = "ENGINE")]
    pub db_engine: String,

    /// Database admin user to put in the connection string
    #[arg(long = "adminUsername", env = "DSM_ADMIN_USERNAME", value_name = "USER")]
    pub admin_username: String,

    /// Name of the DSM database deployment
    #[arg(long = "deploymentName", env = "DSM_DEPLOYMENT_NAME", value_name = "NAME")]
    pub deployment_name: String,

    /// Accept any TLS certificate presented by the DSM server (insecure)
    #[arg(long, env = "DSM_INSECURE")]
    pub insecure: bool,

    /// Request timeout in seconds (1-3600); no timeout by default
    #[arg(long, env = "DSM_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Treat any engine other than postgres as a MySQL deployment
    #[arg(long)]
    pub legacy_engine_fallback: bool,

    /// Exit with a non-zero, category-specific code when the lookup fails
    #[arg(long)]
    pub exit_codes: bool,

    /// OTLP endpoint to export traces to (e.g., http://localhost:4317)
    #[arg(long, env = "DSM_OTLP_ENDPOINT", value_name = "URL")]
    pub otlp_endpoint: Option<String>,
}
