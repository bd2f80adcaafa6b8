//! Trendfeed library crate: a feed of the most-starred GitHub repositories,
//! walking backward through time one date window at a time.
//!
//! The [`feed`] module holds the controller, its store, and the date window
//! arithmetic. [`github`] wraps Octocrab's search API, [`config`] loads
//! layered settings, and [`tui`] provides the interactive terminal interface.

pub mod config;
pub mod feed;
pub mod github;
pub mod telemetry;
pub mod tui;

pub use config::{OperationMode, TrendfeedConfig};
pub use feed::{
    DateJump, DateRange, FeedController, FeedStore, FeedView, FetchFilters, Preference,
    QueuedDispatcher, ViewType,
};
pub use github::{
    ApiBase, FeedError, OctocrabTrendingGateway, PersonalAccessToken, RateLimitInfo, Repository,
    RepositoryPage, TrendingGateway, TrendingIntake,
};
