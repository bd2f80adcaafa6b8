//! Trendfeed CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use trendfeed::{FeedError, OperationMode, TrendfeedConfig};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), FeedError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::Listing => cli::listing::run(&config).await,
        OperationMode::Tui => cli::feed_tui::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`FeedError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<TrendfeedConfig, FeedError> {
    TrendfeedConfig::load().map_err(|error| FeedError::Configuration {
        message: error.to_string(),
    })
}
