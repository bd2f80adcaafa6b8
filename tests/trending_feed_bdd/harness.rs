//! Drives the feed controller against the Wiremock server.

use chrono::{DateTime, TimeZone, Utc};
use trendfeed::feed::{FeedAction, FixedClock, PreferenceOptions, load_windows};
use trendfeed::telemetry::NoopTelemetrySink;
use trendfeed::{
    ApiBase, DateJump, FeedController, FeedError, FeedStore, OctocrabTrendingGateway,
    PersonalAccessToken, Preference, QueuedDispatcher, TrendingIntake, ViewType,
};
use wiremock::MockServer;

use super::runtime::{SharedRuntime, ensure_runtime_and_server};
use super::state::{FeedHarness, FeedState};

pub(crate) const SEARCH_PATH: &str = "/api/v3/search/repositories";

/// Instant the controller treats as "now".
pub(crate) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 15, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("fixed clock instant should be valid"))
}

/// Initialises the runtime and mock server for a scenario.
pub(crate) fn runtime_for(state: &FeedState) -> Result<SharedRuntime, FeedError> {
    ensure_runtime_and_server(&state.runtime, &state.server)
}

fn gateway_for(state: &FeedState) -> Result<OctocrabTrendingGateway, FeedError> {
    let server_url = state
        .server
        .with_ref(MockServer::uri)
        .ok_or_else(|| FeedError::Api {
            message: "mock server URL missing".to_owned(),
        })?;
    let api_base = ApiBase::parse(&format!("{server_url}/api/v3"))?;
    let token = state
        .token
        .get()
        .map(PersonalAccessToken::new)
        .transpose()?;
    OctocrabTrendingGateway::for_token(token.as_ref(), &api_base)
}

fn take_or_create_harness(state: &FeedState) -> FeedHarness {
    state.harness.take().unwrap_or_else(|| {
        let preference = Preference {
            language: state.language.get(),
            date_jump: DateJump::Week,
            view_type: ViewType::Grid,
            options: PreferenceOptions {
                token: state.token.get(),
            },
        };
        FeedHarness {
            store: FeedStore::new(preference),
            controller: FeedController::with_clock(QueuedDispatcher::new(), FixedClock(fixed_now())),
        }
    })
}

/// Runs the listing loop until `pages` windows are loaded.
pub(crate) fn load_feed_windows(state: &FeedState, pages: usize) -> Result<(), FeedError> {
    let runtime = runtime_for(state)?;
    let gateway = gateway_for(state)?;
    let mut harness = take_or_create_harness(state);

    let intake = TrendingIntake::new(&gateway);
    let result = runtime.block_on(load_windows(
        &intake,
        &mut harness.controller,
        &mut harness.store,
        pages,
        &NoopTelemetrySink,
    ));
    state.harness.set(harness);

    if let Err(error) = result {
        state.error.set(error);
    }
    Ok(())
}

/// Selects a new language and performs the fetch the controller triggers.
pub(crate) fn change_language(state: &FeedState, language: &str) -> Result<(), FeedError> {
    let runtime = runtime_for(state)?;
    let gateway = gateway_for(state)?;
    let mut harness = state.harness.take().ok_or_else(|| FeedError::Api {
        message: "feed has not been loaded".to_owned(),
    })?;

    harness.controller.update_language(Some(language.to_owned()));
    let requests = harness
        .store
        .process_dispatched(harness.controller.dispatcher().drain());
    assert!(requests.is_empty(), "selecting a language must not fetch by itself");

    harness.controller.update(&harness.store.snapshot());
    let requests = harness
        .store
        .process_dispatched(harness.controller.dispatcher().drain());
    assert_eq!(requests.len(), 1, "a language change fetches exactly once");

    let intake = TrendingIntake::new(&gateway);
    for request in requests {
        let action = match runtime.block_on(intake.load(&request.filters)) {
            Ok(page) => FeedAction::FetchSucceeded {
                generation: request.generation,
                page,
            },
            Err(error) => FeedAction::FetchFailed {
                generation: request.generation,
                message: error.to_string(),
            },
        };
        harness.store.reduce(action);
    }
    state.harness.set(harness);
    Ok(())
}

/// Returns the `q` parameter of every search the server received.
pub(crate) fn search_queries(state: &FeedState) -> Result<Vec<String>, FeedError> {
    let runtime = runtime_for(state)?;
    let requests = state
        .server
        .with_ref(|server| runtime.block_on(server.received_requests()))
        .flatten()
        .ok_or_else(|| FeedError::Api {
            message: "request recording is disabled".to_owned(),
        })?;

    Ok(requests
        .iter()
        .filter(|request| request.url.path() == SEARCH_PATH)
        .filter_map(|request| {
            request
                .url
                .query_pairs()
                .find(|(key, _)| key == "q")
                .map(|(_, value)| value.into_owned())
        })
        .collect())
}
