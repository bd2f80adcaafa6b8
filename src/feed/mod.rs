//! The trending feed: preferences, date windows, and the controller that
//! turns them into fetches.
//!
//! # Modules
//!
//! - [`controller`]: Fetch triggering and window computation
//! - [`store`]: Preferences, loaded pages, and the reducer
//! - [`dispatch`]: Action dispatch interface and the queued implementation
//! - [`view`]: View model consumed by the CLI and TUI
//! - [`runner`]: Sequential window loading for non-interactive use

pub mod clock;
pub mod controller;
pub mod date_range;
pub mod dispatch;
pub mod filters;
pub mod preference;
pub mod runner;
pub mod store;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use controller::FeedController;
pub use date_range::{DateRange, next_date_range};
pub use dispatch::{ActionDispatcher, DispatchedAction, QueuedDispatcher};
pub use filters::FetchFilters;
pub use preference::{
    DateJump, FetchKey, POPULAR_LANGUAGES, Preference, PreferenceOptions, ViewType, next_language,
};
pub use runner::load_windows;
pub use store::{FeedAction, FeedSnapshot, FeedStore, FetchRequest, GithubState};
pub use view::{FeedView, TOKEN_WARNING};

#[cfg(test)]
pub use dispatch::MockActionDispatcher;
