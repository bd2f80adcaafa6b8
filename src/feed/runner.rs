//! Drives the controller without an event loop.
//!
//! Listing mode has no terminal to redraw: every queued fetch is awaited in
//! turn and reduced into the store before the controller is asked for the
//! next window.

use std::time::Instant;

use super::clock::Clock;
use super::controller::FeedController;
use super::dispatch::QueuedDispatcher;
use super::store::{FeedAction, FeedStore, FetchRequest};
use crate::github::error::FeedError;
use crate::github::gateway::TrendingGateway;
use crate::github::intake::TrendingIntake;
use crate::telemetry::{TelemetryEvent, TelemetrySink};

/// Loads windows until `pages` are in the store.
///
/// Mounts the controller (fetching the first window unless one is already
/// loaded) and then uses the "load next" control for every further window.
///
/// # Errors
///
/// Returns the first fetch failure. The failure is also reduced into the
/// store, so `processing` is cleared and `error` is set.
pub async fn load_windows<G, C>(
    intake: &TrendingIntake<'_, G>,
    controller: &mut FeedController<QueuedDispatcher, C>,
    store: &mut FeedStore,
    pages: usize,
    telemetry: &dyn TelemetrySink,
) -> Result<(), FeedError>
where
    G: TrendingGateway,
    C: Clock,
{
    controller.mount(&store.snapshot());

    loop {
        let requests = store.process_dispatched(controller.dispatcher().drain());
        for request in requests {
            run_request(intake, store, request, telemetry).await?;
        }

        if store.github().repositories.len() >= pages {
            return Ok(());
        }
        if !controller.load_next(&store.snapshot()) {
            return Ok(());
        }
    }
}

async fn run_request<G>(
    intake: &TrendingIntake<'_, G>,
    store: &mut FeedStore,
    request: FetchRequest,
    telemetry: &dyn TelemetrySink,
) -> Result<(), FeedError>
where
    G: TrendingGateway,
{
    let FetchRequest {
        generation,
        filters,
    } = request;
    let start = Instant::now();

    match intake.load(&filters).await {
        Ok(page) => {
            telemetry.record(TelemetryEvent::TrendingPageFetched {
                language: filters.language.clone(),
                date_jump: store.preference().date_jump.to_string(),
                item_count: page.items.len(),
                latency_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            });
            store.reduce(FeedAction::FetchSucceeded { generation, page });
            Ok(())
        }
        Err(error) => {
            tracing::warn!("fetching trending repositories failed: {error}");
            telemetry.record(TelemetryEvent::TrendingFetchFailed {
                message: error.to_string(),
            });
            store.reduce(FeedAction::FetchFailed {
                generation,
                message: error.to_string(),
            });
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use mockall::predicate::function;

    use super::load_windows;
    use crate::feed::{
        FeedController, FeedStore, FixedClock, Preference, QueuedDispatcher,
    };
    use crate::github::error::FeedError;
    use crate::github::gateway::MockTrendingGateway;
    use crate::github::intake::TrendingIntake;
    use crate::github::models::SearchResults;
    use crate::github::models::test_support::minimal_repository;
    use crate::telemetry::TelemetryEvent;
    use crate::telemetry::test_support::RecordingTelemetrySink;

    fn controller() -> FeedController<QueuedDispatcher, FixedClock> {
        let now = Utc
            .with_ymd_and_hms(2026, 10, 16, 0, 0, 0)
            .single()
            .expect("valid instant");
        FeedController::with_clock(QueuedDispatcher::new(), FixedClock(now))
    }

    #[tokio::test]
    async fn loads_contiguous_windows() {
        let mut gateway = MockTrendingGateway::new();
        gateway
            .expect_search_repositories()
            .times(3)
            .returning(|_| {
                Ok(SearchResults {
                    total_count: 1,
                    incomplete_results: false,
                    items: vec![minimal_repository(1, "octo/cat", 5)],
                })
            });
        let intake = TrendingIntake::new(&gateway);
        let mut store = FeedStore::new(Preference::default());
        let sink = RecordingTelemetrySink::default();
        let mut controller = controller();

        load_windows(&intake, &mut controller, &mut store, 3, &sink)
            .await
            .expect("windows should load");

        let pages = &store.github().repositories;
        assert_eq!(pages.len(), 3);
        for pair in pages.windows(2) {
            let [newer, older] = pair else {
                panic!("windows(2) yields pairs");
            };
            assert_eq!(older.end, newer.start, "windows must be contiguous");
        }
        assert_eq!(sink.take().len(), 3, "one telemetry event per window");
    }

    #[tokio::test]
    async fn failure_is_reduced_and_returned() {
        let mut gateway = MockTrendingGateway::new();
        gateway
            .expect_search_repositories()
            .with(function(|query: &crate::github::gateway::SearchQuery| {
                query.language().is_none()
            }))
            .times(1)
            .returning(|_| {
                Err(FeedError::Network {
                    message: "connection reset".to_owned(),
                })
            });
        let intake = TrendingIntake::new(&gateway);
        let mut store = FeedStore::new(Preference::default());
        let sink = RecordingTelemetrySink::default();
        let mut controller = controller();

        let result = load_windows(&intake, &mut controller, &mut store, 2, &sink).await;

        assert!(matches!(result, Err(FeedError::Network { .. })));
        assert!(!store.github().processing, "failures clear processing");
        assert!(store.github().error.is_some());
        assert!(matches!(
            sink.take().as_slice(),
            [TelemetryEvent::TrendingFetchFailed { .. }]
        ));
    }
}
