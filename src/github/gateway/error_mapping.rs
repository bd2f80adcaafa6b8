//! Error mapping helpers for the Octocrab search gateway.

use http::StatusCode;

use crate::github::error::FeedError;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Checks whether the GitHub error represents a rate limit error based on the
/// HTTP status and message / documentation URL content.
///
/// Search quota errors arrive as 403 with "rate limit" in the message, and
/// secondary limits as 429.
pub(super) fn is_rate_limit_error(source: &octocrab::GitHubError) -> bool {
    let is_rate_limit_status = matches!(
        source.status_code,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
    );

    let message_indicates_rate_limit = source.message.to_lowercase().contains("rate limit")
        || source
            .documentation_url
            .as_deref()
            .is_some_and(|url| url.contains("rate-limit"));

    is_rate_limit_status && message_indicates_rate_limit
}

/// Checks if GitHub refused to run the search itself.
pub(super) const fn is_invalid_query(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNPROCESSABLE_ENTITY)
}

/// Joins GitHub's per-field validation messages onto the summary message.
fn validation_detail(source: &octocrab::GitHubError) -> String {
    let details: Vec<String> = source
        .errors
        .iter()
        .flatten()
        .filter_map(|detail| detail.get("message").and_then(serde_json::Value::as_str))
        .map(ToOwned::to_owned)
        .collect();

    if details.is_empty() {
        source.message.clone()
    } else {
        format!("{}: {}", source.message, details.join("; "))
    }
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> FeedError {
    if let octocrab::Error::GitHub { source, .. } = error {
        if is_invalid_query(source.status_code) {
            return FeedError::InvalidQuery {
                message: format!("{operation} failed: {}", validation_detail(source)),
            };
        }
        return if is_auth_failure(source.status_code) {
            FeedError::Authentication {
                message: format!(
                    "{operation} failed: GitHub returned {status} {message}",
                    status = source.status_code,
                    message = source.message
                ),
            }
        } else {
            FeedError::Api {
                message: format!(
                    "{operation} failed with status {status}: {message}",
                    status = source.status_code,
                    message = source.message
                ),
            }
        };
    }

    if is_network_error(error) {
        return FeedError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    FeedError::Api {
        message: format!("{operation} failed: {error}"),
    }
}
