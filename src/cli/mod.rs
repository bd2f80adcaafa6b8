//! CLI operation mode handlers.
//!
//! This module contains the implementations for the two operation modes:
//! - [`listing`]: Print a fixed number of windows and exit
//! - [`feed_tui`]: Interactive TUI for browsing the feed
//!
//! Output formatting utilities are in [`output`].

use std::sync::Arc;

use trendfeed::TrendfeedConfig;
use trendfeed::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};

pub mod feed_tui;
pub mod listing;
pub mod output;

/// Chooses the telemetry sink requested by the configuration.
#[must_use]
pub fn telemetry_sink(config: &TrendfeedConfig) -> Arc<dyn TelemetrySink> {
    if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    }
}
