//! Action dispatch interface used by the feed controller.
//!
//! The controller never mutates shared state directly: it reports what the
//! user asked for through an [`ActionDispatcher`], and the hosting loop
//! decides how to apply it.

use std::sync::{Mutex, PoisonError};

use super::filters::FetchFilters;
use super::preference::{DateJump, ViewType};

/// Receives the actions the feed controller dispatches.
#[cfg_attr(test, mockall::automock)]
pub trait ActionDispatcher: Send + Sync {
    /// Requests one window of trending repositories.
    fn fetch_trending(&self, filters: FetchFilters);

    /// Requests a language filter change.
    fn update_language(&self, language: Option<String>);

    /// Requests a layout change.
    fn update_view_type(&self, view_type: ViewType);

    /// Requests a window width change.
    fn update_date_jump(&self, date_jump: DateJump);
}

/// An action recorded by [`QueuedDispatcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchedAction {
    /// See [`ActionDispatcher::fetch_trending`].
    FetchTrending(FetchFilters),
    /// See [`ActionDispatcher::update_language`].
    UpdateLanguage(Option<String>),
    /// See [`ActionDispatcher::update_view_type`].
    UpdateViewType(ViewType),
    /// See [`ActionDispatcher::update_date_jump`].
    UpdateDateJump(DateJump),
}

/// Dispatcher that queues actions until the hosting loop drains them.
#[derive(Debug, Default)]
pub struct QueuedDispatcher {
    queue: Mutex<Vec<DispatchedAction>>,
}

impl QueuedDispatcher {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every queued action in dispatch order.
    pub fn drain(&self) -> Vec<DispatchedAction> {
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *queue)
    }

    /// Number of queued actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true when nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&self, action: DispatchedAction) {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(action);
    }
}

impl ActionDispatcher for QueuedDispatcher {
    fn fetch_trending(&self, filters: FetchFilters) {
        self.push(DispatchedAction::FetchTrending(filters));
    }

    fn update_language(&self, language: Option<String>) {
        self.push(DispatchedAction::UpdateLanguage(language));
    }

    fn update_view_type(&self, view_type: ViewType) {
        self.push(DispatchedAction::UpdateViewType(view_type));
    }

    fn update_date_jump(&self, date_jump: DateJump) {
        self.push(DispatchedAction::UpdateDateJump(date_jump));
    }
}
