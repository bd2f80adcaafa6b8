//! Feed state and the reducer that applies dispatched actions.
//!
//! Fetch responses are sequenced by generation: changing the language or
//! date jump clears the loaded pages and starts a new generation, and any
//! response still in flight from an older generation is dropped when it
//! arrives.

use super::dispatch::DispatchedAction;
use super::filters::FetchFilters;
use super::preference::{DateJump, Preference, ViewType};
use crate::github::models::RepositoryPage;

/// Loaded repositories and request status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GithubState {
    /// Loaded windows, newest first.
    pub repositories: Vec<RepositoryPage>,
    /// Whether a fetch is in flight.
    pub processing: bool,
    /// Message from the most recent failed fetch.
    pub error: Option<String>,
}

/// Read-only view of the store handed to the controller.
#[derive(Debug, Clone, Copy)]
pub struct FeedSnapshot<'a> {
    /// Current preferences.
    pub preference: &'a Preference,
    /// Current repository state.
    pub github: &'a GithubState,
}

/// State transitions understood by [`FeedStore::reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedAction {
    /// A fetch was sent.
    FetchStarted {
        /// Generation the fetch belongs to.
        generation: u64,
    },
    /// A fetch returned a page.
    FetchSucceeded {
        /// Generation the fetch belongs to.
        generation: u64,
        /// The loaded window.
        page: RepositoryPage,
    },
    /// A fetch failed.
    FetchFailed {
        /// Generation the fetch belongs to.
        generation: u64,
        /// User-facing failure message.
        message: String,
    },
    /// The language filter changed.
    UpdateLanguage(Option<String>),
    /// The layout changed.
    UpdateViewType(ViewType),
    /// The window width changed.
    UpdateDateJump(DateJump),
}

/// A fetch the hosting loop must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Generation to report the result under.
    pub generation: u64,
    /// Filters to search with.
    pub filters: FetchFilters,
}

/// Owns preferences and loaded repositories.
#[derive(Debug, Clone, Default)]
pub struct FeedStore {
    preference: Preference,
    github: GithubState,
    generation: u64,
}

impl FeedStore {
    /// Creates a store with the given preferences and nothing loaded.
    #[must_use]
    pub fn new(preference: Preference) -> Self {
        Self {
            preference,
            github: GithubState::default(),
            generation: 0,
        }
    }

    /// Creates a store with pages already loaded.
    #[must_use]
    pub fn with_pages(preference: Preference, pages: Vec<RepositoryPage>) -> Self {
        Self {
            preference,
            github: GithubState {
                repositories: pages,
                ..GithubState::default()
            },
            generation: 0,
        }
    }

    /// Current preferences.
    #[must_use]
    pub const fn preference(&self) -> &Preference {
        &self.preference
    }

    /// Current repository state.
    #[must_use]
    pub const fn github(&self) -> &GithubState {
        &self.github
    }

    /// Current fetch generation.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Borrows the state for the controller.
    #[must_use]
    pub const fn snapshot(&self) -> FeedSnapshot<'_> {
        FeedSnapshot {
            preference: &self.preference,
            github: &self.github,
        }
    }

    /// Applies one action.
    pub fn reduce(&mut self, action: FeedAction) {
        match action {
            FeedAction::FetchStarted { generation } => {
                if generation == self.generation {
                    self.github.processing = true;
                    self.github.error = None;
                }
            }
            FeedAction::FetchSucceeded { generation, page } => {
                if self.is_stale(generation) {
                    return;
                }
                self.github.repositories.push(page);
                self.github.processing = false;
                self.github.error = None;
            }
            FeedAction::FetchFailed {
                generation,
                message,
            } => {
                if self.is_stale(generation) {
                    return;
                }
                self.github.processing = false;
                self.github.error = Some(message);
            }
            FeedAction::UpdateLanguage(language) => {
                if self.preference.language != language {
                    self.preference.language = language;
                    self.restart();
                }
            }
            FeedAction::UpdateDateJump(date_jump) => {
                if self.preference.date_jump != date_jump {
                    self.preference.date_jump = date_jump;
                    self.restart();
                }
            }
            FeedAction::UpdateViewType(view_type) => {
                self.preference.view_type = view_type;
            }
        }
    }

    /// Applies drained dispatcher actions, returning the fetches to perform.
    ///
    /// Preference updates are reduced in place; each fetch request marks the
    /// store as processing under the current generation.
    pub fn process_dispatched(&mut self, actions: Vec<DispatchedAction>) -> Vec<FetchRequest> {
        let mut requests = Vec::new();
        for action in actions {
            match action {
                DispatchedAction::FetchTrending(filters) => {
                    self.reduce(FeedAction::FetchStarted {
                        generation: self.generation,
                    });
                    requests.push(FetchRequest {
                        generation: self.generation,
                        filters,
                    });
                }
                DispatchedAction::UpdateLanguage(language) => {
                    self.reduce(FeedAction::UpdateLanguage(language));
                }
                DispatchedAction::UpdateViewType(view_type) => {
                    self.reduce(FeedAction::UpdateViewType(view_type));
                }
                DispatchedAction::UpdateDateJump(date_jump) => {
                    self.reduce(FeedAction::UpdateDateJump(date_jump));
                }
            }
        }
        requests
    }

    fn is_stale(&self, generation: u64) -> bool {
        if generation == self.generation {
            return false;
        }
        tracing::debug!(
            "dropping fetch result from generation {generation} (current {})",
            self.generation
        );
        true
    }

    fn restart(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.github.repositories.clear();
        self.github.processing = false;
        self.github.error = None;
    }
}
