//! Error types exposed by the trending feed.

use thiserror::Error;

use super::rate_limit::RateLimitInfo;

/// Errors surfaced while configuring the feed or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeedError {
    /// The API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// A personal access token was supplied but is blank.
    #[error("personal access token must not be blank")]
    MissingToken,

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Rate limit exceeded - the API returned 403/429 with a rate limit message.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Rate limit info if it could be fetched after the failure.
        rate_limit: Option<RateLimitInfo>,
        /// Error message from GitHub.
        message: String,
    },

    /// GitHub could not process the search query (HTTP 422), for example an
    /// unknown language qualifier or a malformed date window.
    #[error("GitHub rejected the search query: {message}")]
    InvalidQuery {
        /// Validation message returned by GitHub.
        message: String,
    },

    /// Invalid page size for the search endpoint.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the invalid parameter.
        message: String,
    },

    /// The date jump is not one of `day`, `week`, `month`, or `year`.
    #[error("unknown date jump '{value}' (expected day, week, month, or year)")]
    InvalidDateJump {
        /// The rejected value.
        value: String,
    },

    /// The view type is not one of `grid` or `list`.
    #[error("unknown view type '{value}' (expected grid or list)")]
    InvalidViewType {
        /// The rejected value.
        value: String,
    },
}
