//! GitHub repository search.
//!
//! This module wraps Octocrab to search repositories created inside a date
//! window, ordered by stars. Errors are mapped into user-friendly variants so
//! that callers can surface precise failures without exposing Octocrab
//! internals.

pub mod error;
pub mod gateway;
pub mod intake;
pub mod locator;
pub mod models;
pub mod rate_limit;

pub use error::FeedError;
pub use gateway::{DEFAULT_PER_PAGE, OctocrabTrendingGateway, SearchQuery, TrendingGateway};
pub use intake::TrendingIntake;
pub use locator::{ApiBase, PersonalAccessToken};
pub use models::{Repository, RepositoryPage, SearchResults};
pub use rate_limit::RateLimitInfo;

#[cfg(test)]
pub use gateway::MockTrendingGateway;

#[cfg(test)]
mod tests;
