//! Main TUI application model implementing the MVU pattern.
//!
//! [`FeedApp`] owns the feed store and a controller whose dispatcher queues
//! actions. Every handler that talks to the controller ends with a flush:
//! queued preference updates are reduced into the store, the controller sees
//! the new snapshot (re-fetching when the language or date jump changed), and
//! the newest queued fetch becomes an async command.
//!
//! # Module Structure
//!
//! - `feed_handlers`: Controller calls, flushing, and fetch commands
//! - `model_impl`: The `bubbletea_rs::Model` implementation
//! - `navigation`: Cursor movement
//! - `rendering`: View rendering methods for terminal output

use bubbletea_rs::Cmd;

use crate::feed::{FeedController, FeedStore, FeedView, Preference, QueuedDispatcher};
use crate::github::models::Repository;

use super::messages::AppMsg;

mod feed_handlers;
mod model_impl;
mod navigation;
mod rendering;

/// Rows used by the top nav, filter bar, token warning, load-next control,
/// and status bar.
pub(crate) const CHROME_HEIGHT: usize = 5;

/// Main application model for the trending feed TUI.
#[derive(Debug)]
pub struct FeedApp {
    /// Preferences and loaded windows.
    pub(crate) store: FeedStore,
    /// Fetch triggering and window computation.
    controller: FeedController<QueuedDispatcher>,
    /// Index of the selected repository across all windows.
    cursor_position: usize,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Set once the feed has been mounted.
    has_initialized: bool,
}

impl FeedApp {
    /// Creates an application with nothing loaded.
    #[must_use]
    pub fn new(preference: Preference) -> Self {
        Self::from_store(FeedStore::new(preference))
    }

    /// Creates an application around an existing store.
    #[must_use]
    pub fn from_store(store: FeedStore) -> Self {
        Self {
            store,
            controller: FeedController::new(QueuedDispatcher::new()),
            cursor_position: 0,
            width: 80,
            height: 24,
            show_help: false,
            has_initialized: false,
        }
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Number of repositories across all loaded windows.
    #[must_use]
    pub fn repository_count(&self) -> usize {
        self.store
            .github()
            .repositories
            .iter()
            .map(|page| page.items.len())
            .sum()
    }

    /// Returns the repository under the cursor, if any.
    #[must_use]
    pub fn selected_repository(&self) -> Option<&Repository> {
        self.store
            .github()
            .repositories
            .iter()
            .flat_map(|page| page.items.iter())
            .nth(self.cursor_position)
    }

    /// Current preferences.
    #[must_use]
    pub const fn preference(&self) -> &Preference {
        self.store.preference()
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.store.github().processing
    }

    /// The view model for the current state.
    #[must_use]
    pub fn feed_view(&self) -> FeedView<'_> {
        self.controller.render(&self.store.snapshot())
    }

    /// Handles a message and updates state accordingly.
    ///
    /// Delegates to specialised handlers for each message category to keep
    /// cyclomatic complexity low.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_feed_control() {
            return self.handle_feed_control_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Initialized => self.handle_initialized(),
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                None
            }
            _ => {
                // Unreachable: caller filters to lifecycle messages.
                None
            }
        }
    }

    /// Mounts the feed on the synthetic startup message.
    ///
    /// Subsequent `Initialized` messages are ignored so the first window is
    /// only requested once.
    fn handle_initialized(&mut self) -> Option<Cmd> {
        if self.has_initialized {
            return None;
        }

        self.has_initialized = true;
        self.controller.mount(&self.store.snapshot());
        self.flush()
    }

    /// Rows available to the repository layout.
    pub(crate) const fn body_height(&self) -> usize {
        (self.height as usize).saturating_sub(CHROME_HEIGHT)
    }
}
