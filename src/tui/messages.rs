//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::github::error::FeedError;
use crate::github::models::RepositoryPage;

/// Messages for the trending feed TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one repository.
    CursorUp,
    /// Move cursor down one repository.
    CursorDown,
    /// Move cursor to first repository.
    Home,
    /// Move cursor to last repository.
    End,

    // Feed controls
    /// Load the next (older) window.
    LoadNext,
    /// Switch to the next language filter.
    CycleLanguage,
    /// Switch to the next window width.
    CycleDateJump,
    /// Switch between grid and list layouts.
    ToggleViewType,

    // Data loading
    /// A fetch returned a window.
    FetchComplete {
        /// Store generation the fetch was issued under.
        generation: u64,
        /// The loaded window.
        page: RepositoryPage,
        /// Round-trip time of the fetch.
        latency_ms: u64,
    },
    /// A fetch failed.
    FetchFailed {
        /// Store generation the fetch was issued under.
        generation: u64,
        /// User-facing failure message.
        message: String,
    },

    // Application lifecycle
    /// Synthetic startup event that mounts the feed.
    Initialized,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Creates a failure message from a `FeedError`.
    #[must_use]
    pub fn from_error(generation: u64, error: &FeedError) -> Self {
        Self::FetchFailed {
            generation,
            message: error.to_string(),
        }
    }

    /// Returns true for cursor movement messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp | Self::CursorDown | Self::Home | Self::End
        )
    }

    /// Returns true for messages that go through the feed controller.
    #[must_use]
    pub const fn is_feed_control(&self) -> bool {
        matches!(
            self,
            Self::LoadNext | Self::CycleLanguage | Self::CycleDateJump | Self::ToggleViewType
        )
    }

    /// Returns true for fetch results.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(self, Self::FetchComplete { .. } | Self::FetchFailed { .. })
    }
}
