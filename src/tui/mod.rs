//! Terminal User Interface for browsing trending repositories.
//!
//! This module provides an interactive TUI that walks backward through time
//! one window at a time, using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::FeedApp`], which owns the
//!   [`FeedStore`](crate::feed::FeedStore) and a
//!   [`FeedController`](crate::feed::FeedController)
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Startup Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, we use a module-level storage pattern. Call
//! [`set_initial_preference`] and [`set_fetch_context`] before starting the
//! program; `FeedApp::init()` and the fetch commands read them back.

use std::sync::{Arc, OnceLock};

use crate::feed::{FetchFilters, Preference};
use crate::github::error::FeedError;
use crate::github::gateway::OctocrabTrendingGateway;
use crate::github::intake::TrendingIntake;
use crate::github::locator::{ApiBase, PersonalAccessToken};
use crate::github::models::RepositoryPage;
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;

pub use app::FeedApp;

/// Preferences the feed starts with.
static INITIAL_PREFERENCE: OnceLock<Preference> = OnceLock::new();

/// Where and how fetch commands search.
static FETCH_CONTEXT: OnceLock<FetchContext> = OnceLock::new();

/// Sink for fetch telemetry.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Context required to search GitHub from a fetch command.
struct FetchContext {
    api_base: ApiBase,
    per_page: u8,
}

/// Sets the preferences the TUI starts with.
///
/// Returns `true` if the preference was set, `false` if it was already set.
pub fn set_initial_preference(preference: Preference) -> bool {
    INITIAL_PREFERENCE.set(preference).is_ok()
}

/// Sets the API base and page size used by fetch commands.
///
/// Without this context every fetch fails with an error message in the
/// status bar.
///
/// Returns `true` if the context was set, `false` if it was already set.
pub fn set_fetch_context(api_base: ApiBase, per_page: u8) -> bool {
    FETCH_CONTEXT
        .set(FetchContext { api_base, per_page })
        .is_ok()
}

/// Sets the telemetry sink for fetch events.
///
/// Returns `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Gets a clone of the initial preference, or the defaults when unset.
pub(crate) fn get_initial_preference() -> Preference {
    INITIAL_PREFERENCE.get().cloned().unwrap_or_default()
}

/// Records a telemetry event on the configured sink.
pub(crate) fn record_telemetry(event: TelemetryEvent) {
    match TELEMETRY_SINK.get() {
        Some(sink) => sink.record(event),
        None => NoopTelemetrySink.record(event),
    }
}

/// Loads one window from GitHub.
///
/// The token travels with the filters so a token change never needs a new
/// context.
pub(crate) async fn fetch_page(filters: &FetchFilters) -> Result<RepositoryPage, FeedError> {
    let context = FETCH_CONTEXT.get().ok_or_else(|| FeedError::Configuration {
        message: "fetch context not configured".to_owned(),
    })?;

    let token = filters
        .token
        .as_deref()
        .map(PersonalAccessToken::new)
        .transpose()?;
    let gateway = OctocrabTrendingGateway::for_token(token.as_ref(), &context.api_base)?;
    TrendingIntake::new(&gateway)
        .with_per_page(context.per_page)
        .load(filters)
        .await
}
