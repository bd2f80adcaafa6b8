//! Scenario state for the trending feed BDD tests.

use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use trendfeed::feed::FixedClock;
use trendfeed::{FeedController, FeedError, FeedStore, QueuedDispatcher};
use wiremock::MockServer;

use super::runtime::SharedRuntime;

/// Store and controller surviving between steps.
pub(crate) struct FeedHarness {
    pub(crate) store: FeedStore,
    pub(crate) controller: FeedController<QueuedDispatcher, FixedClock>,
}

#[derive(ScenarioState, Default)]
pub(crate) struct FeedState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) token: Slot<String>,
    pub(crate) language: Slot<String>,
    pub(crate) harness: Slot<FeedHarness>,
    pub(crate) error: Slot<FeedError>,
}
