//! Feed controller: window computation and fetch triggering.
//!
//! The controller reads a [`FeedSnapshot`] and writes only through an
//! [`ActionDispatcher`]. Re-fetching is keyed on the language and date jump:
//! whenever either differs from the last value the controller saw, one fetch
//! is triggered. The layout never triggers a fetch.

use super::clock::{Clock, SystemClock};
use super::date_range::{DateRange, next_date_range};
use super::dispatch::ActionDispatcher;
use super::filters::FetchFilters;
use super::preference::{DateJump, FetchKey, ViewType};
use super::store::FeedSnapshot;
use super::view::FeedView;

/// Derives filters from preferences and triggers fetches.
#[derive(Debug)]
pub struct FeedController<D, C = SystemClock> {
    dispatcher: D,
    clock: C,
    fetch_key: Option<FetchKey>,
}

impl<D> FeedController<D, SystemClock>
where
    D: ActionDispatcher,
{
    /// Creates a controller that reads the system clock.
    #[must_use]
    pub const fn new(dispatcher: D) -> Self {
        Self::with_clock(dispatcher, SystemClock)
    }
}

impl<D, C> FeedController<D, C>
where
    D: ActionDispatcher,
    C: Clock,
{
    /// Creates a controller with an explicit time source.
    #[must_use]
    pub const fn with_clock(dispatcher: D, clock: C) -> Self {
        Self {
            dispatcher,
            clock,
            fetch_key: None,
        }
    }

    /// Borrows the dispatcher.
    #[must_use]
    pub const fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Called once when the feed first appears.
    ///
    /// Fetches the first window unless pages are already loaded.
    pub fn mount(&mut self, snapshot: &FeedSnapshot<'_>) {
        self.fetch_key = Some(snapshot.preference.fetch_key());
        if snapshot.github.repositories.is_empty() {
            self.trigger_fetch(snapshot);
        }
    }

    /// Called after every state change.
    ///
    /// Fetches once when the language or date jump changed since the last
    /// mount or update. Before the first mount this behaves like [`mount`].
    ///
    /// [`mount`]: Self::mount
    pub fn update(&mut self, snapshot: &FeedSnapshot<'_>) {
        let current = snapshot.preference.fetch_key();
        let Some(previous) = self.fetch_key.as_ref() else {
            self.mount(snapshot);
            return;
        };

        if *previous == current {
            return;
        }

        tracing::debug!(
            "fetch key changed (language {:?}, date jump {}), reloading",
            current.language,
            current.date_jump
        );
        self.fetch_key = Some(current);
        self.trigger_fetch(snapshot);
    }

    /// The "load next" control.
    ///
    /// Returns false without fetching while a fetch is in flight, because the
    /// control is not offered then.
    pub fn load_next(&self, snapshot: &FeedSnapshot<'_>) -> bool {
        if snapshot.github.processing {
            return false;
        }
        self.trigger_fetch(snapshot);
        true
    }

    /// Computes the window after the last loaded page.
    #[must_use]
    pub fn compute_next_date_range(&self, snapshot: &FeedSnapshot<'_>) -> DateRange {
        next_date_range(
            &snapshot.github.repositories,
            snapshot.preference.date_jump,
            self.clock.now(),
        )
    }

    /// Builds the filters for the next fetch.
    #[must_use]
    pub fn build_filters(&self, snapshot: &FeedSnapshot<'_>) -> FetchFilters {
        FetchFilters::new(self.compute_next_date_range(snapshot))
            .with_language(snapshot.preference.language())
            .with_token(snapshot.preference.token())
    }

    /// Dispatches a fetch for the next window.
    ///
    /// Repeated calls are not deduplicated.
    pub fn trigger_fetch(&self, snapshot: &FeedSnapshot<'_>) {
        let filters = self.build_filters(snapshot);
        tracing::debug!(
            "dispatching fetch for {}..{}",
            filters.date_range.start,
            filters.date_range.end
        );
        self.dispatcher.fetch_trending(filters);
    }

    /// Forwards a language selection.
    pub fn update_language(&self, language: Option<String>) {
        self.dispatcher.update_language(language);
    }

    /// Forwards a layout selection.
    pub fn update_view_type(&self, view_type: ViewType) {
        self.dispatcher.update_view_type(view_type);
    }

    /// Forwards a window width selection.
    pub fn update_date_jump(&self, date_jump: DateJump) {
        self.dispatcher.update_date_jump(date_jump);
    }

    /// Describes what to draw for `snapshot`.
    #[must_use]
    pub fn render<'a>(&self, snapshot: &FeedSnapshot<'a>) -> FeedView<'a> {
        FeedView::from_snapshot(snapshot)
    }
}
