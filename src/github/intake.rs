//! High-level intake facade that turns fetch filters into a loaded page.

use super::error::FeedError;
use super::gateway::{DEFAULT_PER_PAGE, SearchQuery, TrendingGateway};
use super::models::RepositoryPage;
use crate::feed::FetchFilters;

/// Loads one date window of trending repositories using a gateway.
pub struct TrendingIntake<'client, Gateway>
where
    Gateway: TrendingGateway,
{
    client: &'client Gateway,
    per_page: u8,
}

impl<'client, Gateway> TrendingIntake<'client, Gateway>
where
    Gateway: TrendingGateway,
{
    /// Create a new intake facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self {
            client,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Sets how many repositories each window loads.
    #[must_use]
    pub const fn with_per_page(mut self, per_page: u8) -> Self {
        self.per_page = per_page;
        self
    }

    /// Search the window described by `filters`.
    ///
    /// The returned page echoes the filters' date range so the next window
    /// can be computed from it.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway, including GitHub
    /// authentication errors, rate limiting, or network problems.
    pub async fn load(&self, filters: &FetchFilters) -> Result<RepositoryPage, FeedError> {
        let query = SearchQuery::from_filters(filters).with_per_page(self.per_page);
        let results = self.client.search_repositories(&query).await?;
        if results.incomplete_results {
            tracing::debug!("search for {} returned incomplete results", query.query_string());
        }

        Ok(RepositoryPage {
            start: filters.date_range.start,
            end: filters.date_range.end,
            items: results.items,
        })
    }
}
