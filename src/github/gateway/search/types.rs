//! Query type for repository search requests.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::feed::{DateRange, FetchFilters};

/// Default number of repositories requested per window.
pub const DEFAULT_PER_PAGE: u8 = 30;

/// Search for repositories created inside a date window.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use trendfeed::feed::DateRange;
/// use trendfeed::github::SearchQuery;
///
/// let range = DateRange {
///     start: Utc.with_ymd_and_hms(2026, 10, 9, 0, 0, 0).unwrap(),
///     end: Utc.with_ymd_and_hms(2026, 10, 16, 0, 0, 0).unwrap(),
/// };
/// let query = SearchQuery::new(range).with_language(Some("rust"));
/// assert_eq!(
///     query.query_string(),
///     "created:2026-10-09T00:00:00Z..2026-10-16T00:00:00Z language:rust"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    created: DateRange,
    language: Option<String>,
    per_page: u8,
}

impl SearchQuery {
    /// Creates a query for repositories created in `created`.
    #[must_use]
    pub const fn new(created: DateRange) -> Self {
        Self {
            created,
            language: None,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Builds the query for a set of fetch filters.
    #[must_use]
    pub fn from_filters(filters: &FetchFilters) -> Self {
        Self::new(filters.date_range).with_language(filters.language.as_deref())
    }

    /// Restricts results to a language; blank values are ignored.
    #[must_use]
    pub fn with_language(mut self, language: Option<&str>) -> Self {
        self.language = language
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ToOwned::to_owned);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_per_page(mut self, per_page: u8) -> Self {
        self.per_page = per_page;
        self
    }

    /// The creation-date window.
    #[must_use]
    pub const fn created(&self) -> &DateRange {
        &self.created
    }

    /// The language qualifier, if any.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Number of results requested.
    #[must_use]
    pub const fn per_page(&self) -> u8 {
        self.per_page
    }

    /// Renders the `q` parameter understood by the search endpoint.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut query = format!(
            "created:{start}..{end}",
            start = format_timestamp(self.created.start),
            end = format_timestamp(self.created.end)
        );

        if let Some(language) = &self.language {
            if language.contains(char::is_whitespace) {
                query.push_str(&format!(" language:\"{language}\""));
            } else {
                query.push_str(&format!(" language:{language}"));
            }
        }

        query
    }
}

fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}
