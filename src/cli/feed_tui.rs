//! TUI mode for browsing the trending feed.
//!
//! This module provides the entry point for the interactive terminal user
//! interface. Nothing is fetched here: the app mounts the feed on startup and
//! every fetch runs as a command inside the program loop.

use std::io::{self, Write};

use bubbletea_rs::Program;

use trendfeed::tui::{FeedApp, set_fetch_context, set_initial_preference, set_telemetry_sink};
use trendfeed::{FeedError, TrendfeedConfig};

use super::telemetry_sink;

/// Runs the TUI mode.
///
/// # Errors
///
/// Returns an error if:
/// - The date jump, view type, or API base is invalid
/// - The TUI fails to initialise
pub async fn run(config: &TrendfeedConfig) -> Result<(), FeedError> {
    let preference = config.preference()?;
    let api_base = config.api_base()?;

    // Store startup context in global state for Model::init() and the fetch
    // commands. If already set (e.g. re-running TUI in same process), this is
    // a no-op and the existing context remains.
    let _ = set_initial_preference(preference);
    let _ = set_fetch_context(api_base, config.per_page);
    let _ = set_telemetry_sink(telemetry_sink(config));

    run_tui().await.map_err(|error| FeedError::Api {
        message: format!("TUI error: {error}"),
    })
}

/// Runs the bubbletea-rs program with the `FeedApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<FeedApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
