//! Gateways for searching repositories through Octocrab.
//!
//! The trait keeps the feed independent of the HTTP client so tests can mock
//! it, while the Octocrab implementation performs the real requests.

mod client;
mod error_mapping;
mod search;

pub use search::{DEFAULT_PER_PAGE, OctocrabTrendingGateway, SearchQuery};

use async_trait::async_trait;

use crate::github::error::FeedError;
use crate::github::models::SearchResults;

/// Gateway that can search GitHub repositories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrendingGateway: Send + Sync {
    /// Search repositories matching the query, most starred first.
    async fn search_repositories(&self, query: &SearchQuery) -> Result<SearchResults, FeedError>;
}
