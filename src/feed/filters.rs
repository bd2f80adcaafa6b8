//! Filters handed to the fetch action.

use super::date_range::DateRange;
use super::preference::non_blank;

/// Everything the fetch action needs to load one window.
///
/// Built fresh for every fetch; absent values are `None`, never empty
/// strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFilters {
    /// Window to search.
    pub date_range: DateRange,
    /// Language qualifier.
    pub language: Option<String>,
    /// Personal access token for the request.
    pub token: Option<String>,
}

impl FetchFilters {
    /// Creates filters for a window with no language or token.
    #[must_use]
    pub const fn new(date_range: DateRange) -> Self {
        Self {
            date_range,
            language: None,
            token: None,
        }
    }

    /// Sets the language, omitting blank values.
    #[must_use]
    pub fn with_language(mut self, language: Option<&str>) -> Self {
        self.language = non_blank(language).map(ToOwned::to_owned);
        self
    }

    /// Sets the token, omitting blank values.
    #[must_use]
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = non_blank(token).map(ToOwned::to_owned);
        self
    }
}
