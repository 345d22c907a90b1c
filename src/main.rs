//! Kudos CLI entrypoint for the external contributor report.

use std::io::{self, Write};
use std::process::ExitCode;

use kudos::{KudosConfig, KudosError};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!("run failed: {error:?}");
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), KudosError> {
    let config = load_config()?;
    cli::report::run(&config).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`KudosError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<KudosConfig, KudosError> {
    KudosConfig::load().map_err(|error| KudosError::Configuration {
        message: error.to_string(),
    })
}

/// Sends diagnostics to stderr so they never mix with progress output.
///
/// `RUST_LOG` overrides the default filter, e.g. `RUST_LOG=kudos=debug`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kudos=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
