//! Octocrab-backed repository search.

use async_trait::async_trait;
use chrono::Utc;
use octocrab::Octocrab;

use crate::github::error::FeedError;
use crate::github::locator::{ApiBase, PersonalAccessToken};
use crate::github::models::{ApiSearchResponse, SearchResults};
use crate::github::rate_limit::RateLimitInfo;

use super::TrendingGateway;
use super::client::build_octocrab_client;
use super::error_mapping::{is_rate_limit_error, map_octocrab_error};

mod types;

pub use types::{DEFAULT_PER_PAGE, SearchQuery};

const SEARCH_PATH: &str = "/search/repositories";

/// Octocrab-backed search gateway.
pub struct OctocrabTrendingGateway {
    client: Octocrab,
}

impl OctocrabTrendingGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the API base and optional token.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::InvalidUrl` when the base URI cannot be parsed or
    /// `FeedError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: Option<&PersonalAccessToken>,
        api_base: &ApiBase,
    ) -> Result<Self, FeedError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl TrendingGateway for OctocrabTrendingGateway {
    async fn search_repositories(&self, query: &SearchQuery) -> Result<SearchResults, FeedError> {
        validate_per_page(query.per_page())?;

        let q = query.query_string();
        let per_page = query.per_page().to_string();
        let query_params = [
            ("q", q.as_str()),
            ("sort", "stars"),
            ("order", "desc"),
            ("per_page", per_page.as_str()),
        ];

        tracing::debug!("searching repositories: {q}");

        match self
            .client
            .get::<ApiSearchResponse, _, _>(SEARCH_PATH, Some(&query_params))
            .await
        {
            Ok(response) => Ok(response.into()),
            Err(error) => Err(self
                .map_octocrab_error_with_rate_limit("search repositories", &error)
                .await),
        }
    }
}

impl OctocrabTrendingGateway {
    async fn map_octocrab_error_with_rate_limit(
        &self,
        operation: &str,
        error: &octocrab::Error,
    ) -> FeedError {
        match error {
            octocrab::Error::GitHub { source, .. } if is_rate_limit_error(source) => {
                let rate_limit = self.fetch_search_rate_limit().await;
                let base_message =
                    format!("{operation} failed: {message}", message = source.message);
                let message = match &rate_limit {
                    Some(info) => format!("{base_message} ({})", info.describe_from(unix_now())),
                    None => base_message,
                };

                tracing::warn!("{message}");
                FeedError::RateLimitExceeded {
                    rate_limit,
                    message,
                }
            }
            _ => map_octocrab_error(operation, error),
        }
    }

    async fn fetch_search_rate_limit(&self) -> Option<RateLimitInfo> {
        let rate = self.client.ratelimit().get().await.ok()?.resources.search;
        let Ok(limit) = u32::try_from(rate.limit) else {
            return None;
        };
        let Ok(remaining) = u32::try_from(rate.remaining) else {
            return None;
        };
        Some(RateLimitInfo::new(limit, remaining, rate.reset))
    }
}

fn unix_now() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or(0)
}

fn validate_per_page(per_page: u8) -> Result<(), FeedError> {
    if per_page == 0 {
        return Err(FeedError::InvalidPagination {
            message: "per_page must be at least 1".to_owned(),
        });
    }

    if per_page > 100 {
        return Err(FeedError::InvalidPagination {
            message: "per_page must not exceed 100".to_owned(),
        });
    }

    Ok(())
}
