//! API endpoint and credential wrappers for the search gateway.

use url::Url;

use super::error::FeedError;

/// Default public GitHub REST API endpoint.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, FeedError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FeedError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Base URL of the GitHub REST API that serves repository search.
///
/// # Example
///
/// ```
/// use trendfeed::github::locator::ApiBase;
///
/// let base = ApiBase::parse("https://github.com").expect("should parse");
/// assert_eq!(base.as_str(), "https://api.github.com/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(Url);

impl ApiBase {
    /// Parses an API base URL.
    ///
    /// The web host `github.com` is rewritten to `api.github.com`; any other
    /// host (GitHub Enterprise, test servers) is used as given.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::InvalidUrl` when the input is not an absolute
    /// `http`/`https` URL with a host.
    pub fn parse(input: &str) -> Result<Self, FeedError> {
        let parsed =
            Url::parse(input.trim()).map_err(|error| FeedError::InvalidUrl(error.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FeedError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        let host = parsed
            .host_str()
            .ok_or_else(|| FeedError::InvalidUrl("URL must include a host".to_owned()))?;

        if host.eq_ignore_ascii_case("github.com") || host.eq_ignore_ascii_case("www.github.com")
        {
            return Self::github_com();
        }

        Ok(Self(parsed))
    }

    /// The public GitHub API endpoint.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::InvalidUrl` only if the built-in constant fails to
    /// parse.
    pub fn github_com() -> Result<Self, FeedError> {
        Url::parse(GITHUB_API_BASE)
            .map(Self)
            .map_err(|error| FeedError::InvalidUrl(error.to_string()))
    }

    /// Borrow the URL as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Borrow the parsed URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.0
    }
}
