//! Data models for trending repositories and search responses.

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Repository summary displayed by the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Numeric repository identifier.
    pub id: u64,
    /// Repository name without the owner.
    pub name: String,
    /// `owner/name` identifier.
    pub full_name: String,
    /// Owner login if present.
    pub owner_login: Option<String>,
    /// Short description.
    pub description: Option<String>,
    /// Primary language detected by GitHub.
    pub language: Option<String>,
    /// HTML URL for displaying to a user.
    pub html_url: Option<String>,
    /// Number of stars.
    pub stargazers_count: u64,
    /// Number of forks.
    pub forks_count: u64,
    /// Number of open issues.
    pub open_issues_count: u64,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

/// One loaded date window of trending repositories.
///
/// Pages are appended in fetch order, so each page's window ends where the
/// previous page's window starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryPage {
    /// Inclusive lower bound of the creation-date window.
    pub start: DateTime<Utc>,
    /// Upper bound of the creation-date window.
    pub end: DateTime<Utc>,
    /// Repositories ordered by stars, most starred first.
    pub items: Vec<Repository>,
}

/// Result of a repository search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    /// Total number of matches reported by GitHub.
    pub total_count: u64,
    /// Whether GitHub timed out before collecting every match.
    pub incomplete_results: bool,
    /// Matching repositories on the requested page.
    pub items: Vec<Repository>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiSearchResponse {
    #[serde(default)]
    pub(crate) total_count: u64,
    #[serde(default)]
    pub(crate) incomplete_results: bool,
    #[serde(default)]
    pub(crate) items: Vec<ApiRepository>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRepository {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) full_name: String,
    pub(crate) owner: Option<ApiOwner>,
    pub(crate) description: Option<String>,
    pub(crate) language: Option<String>,
    pub(crate) html_url: Option<String>,
    #[serde(default)]
    pub(crate) stargazers_count: u64,
    #[serde(default)]
    pub(crate) forks_count: u64,
    #[serde(default)]
    pub(crate) open_issues_count: u64,
    pub(crate) created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiOwner {
    pub(crate) login: Option<String>,
}

impl From<ApiRepository> for Repository {
    fn from(value: ApiRepository) -> Self {
        Self {
            id: value.id,
            name: value.name,
            full_name: value.full_name,
            owner_login: value.owner.and_then(|owner| owner.login),
            description: value.description,
            language: value.language,
            html_url: value.html_url,
            stargazers_count: value.stargazers_count,
            forks_count: value.forks_count,
            open_issues_count: value.open_issues_count,
            created_at: value.created_at,
        }
    }
}

impl From<ApiSearchResponse> for SearchResults {
    fn from(value: ApiSearchResponse) -> Self {
        Self {
            total_count: value.total_count,
            incomplete_results: value.incomplete_results,
            items: value.items.into_iter().map(Repository::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiSearchResponse, SearchResults};

    #[test]
    fn search_response_maps_owner_login_and_counts() {
        let body = serde_json::json!({
            "total_count": 2,
            "incomplete_results": false,
            "items": [
                {
                    "id": 7,
                    "name": "ripgrep",
                    "full_name": "BurntSushi/ripgrep",
                    "owner": { "login": "BurntSushi" },
                    "description": "fast grep",
                    "language": "Rust",
                    "html_url": "https://github.com/BurntSushi/ripgrep",
                    "stargazers_count": 40000,
                    "forks_count": 1800,
                    "open_issues_count": 12,
                    "created_at": "2016-03-11T03:26:41Z"
                },
                { "id": 8, "name": "bare", "full_name": "someone/bare" }
            ]
        });

        let response: ApiSearchResponse =
            serde_json::from_value(body).expect("search response should deserialise");
        let results = SearchResults::from(response);

        assert_eq!(results.total_count, 2);
        let first = results.items.first().expect("should have first item");
        assert_eq!(first.owner_login.as_deref(), Some("BurntSushi"));
        assert_eq!(first.stargazers_count, 40_000);
        assert!(first.created_at.is_some(), "created_at should parse");

        let second = results.items.get(1).expect("should have second item");
        assert_eq!(second.owner_login, None);
        assert_eq!(second.stargazers_count, 0);
    }
}
