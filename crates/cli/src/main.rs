//! DSM CLI - print the connection string of a DSM-provisioned database.
//!
//! Responsibilities:
//! - Parse command-line arguments and `DSM_*` environment variables.
//! - Log in to DSM, look up the deployment and print its connection string.
//! - Report failures as a single `An error occurred: <message>` line.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - Site-prefixed automation variables (see `dsm_config::dsm_params_for_site`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - stdout carries only the connection string or the error line; logs go to stderr.
//! - Failures exit 0 unless `--exit-codes` is given.

mod args;
mod error;

use anyhow::Result;
use args::Cli;
use clap::Parser;
use dsm_client::tracing::TracingConfig;
use dsm_client::{ConnectionInputs, ConnectionString, DsmClient};
use dsm_config::{Config, ConfigLoader};
use error::{ExitCode, ExitCodeExt};
use std::time::Duration;

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    let mut tracing_config = TracingConfig::new().with_service_name("dsm-cli");
    if let Some(ref endpoint) = cli.otlp_endpoint {
        tracing_config = tracing_config.with_otlp_endpoint(endpoint);
    }
    let tracing_guard = match tracing_config.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize tracing: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let outcome = run(&cli).await;
    tracing_guard.shutdown();

    match outcome {
        Ok(connection) => println!("{}", connection.expose_secret()),
        Err(e) => {
            println!("An error occurred: {}", e);
            if cli.exit_codes {
                std::process::exit(e.exit_code().as_i32());
            }
        }
    }
}

async fn run(cli: &Cli) -> Result<ConnectionString> {
    let inputs = connection_inputs(cli)?;
    let config = build_config(cli)?;

    tracing::debug!(
        engine = inputs.scheme(),
        deployment = inputs.deployment_name(),
        "Looking up connection string"
    );
    let client = DsmClient::builder().from_config(&config).connect().await?;
    let connection = client.get_db_connection_string(&inputs).await?;
    Ok(connection)
}

fn connection_inputs(cli: &Cli) -> Result<ConnectionInputs> {
    if cli.legacy_engine_fallback {
        return Ok(ConnectionInputs::with_legacy_engine_fallback(
            &cli.db_engine,
            cli.admin_username.clone(),
            cli.deployment_name.clone(),
        ));
    }

    Ok(ConnectionInputs::new(
        &cli.db_engine,
        cli.admin_username.clone(),
        cli.deployment_name.clone(),
    )?)
}

fn build_config(cli: &Cli) -> Result<Config> {
    // Flags are already env-backed by clap, so the loader's own env pass is skipped.
    let mut loader = ConfigLoader::new()
        .with_host(cli.dsm_host.clone())
        .with_username(cli.username.clone())
        .with_password(cli.password.clone());

    if cli.insecure {
        loader = loader.with_accept_invalid_certs(true);
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }

    Ok(loader.build()?)
}
