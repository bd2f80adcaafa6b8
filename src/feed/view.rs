//! View model produced by the feed controller.

use super::date_range::DateRange;
use super::preference::{DateJump, ViewType};
use super::store::FeedSnapshot;
use crate::github::models::RepositoryPage;

/// Shown when no personal access token is configured.
pub const TOKEN_WARNING: &str =
    "Not required, but add a token (--token or GITHUB_TOKEN) to avoid hitting the rate limit";

/// Everything a surface needs to draw the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedView<'a> {
    /// Layout for the repositories.
    pub view_type: ViewType,
    /// Window width, also used to label headings.
    pub date_jump: DateJump,
    /// Loaded windows, newest first.
    pub pages: &'a [RepositoryPage],
    /// Window of the newest page, when one is loaded.
    pub heading: Option<DateRange>,
    /// Whether the language and layout filters are offered.
    pub show_filters: bool,
    /// Active language filter.
    pub selected_language: Option<&'a str>,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Label of the "load next" control, absent while loading.
    pub load_next_label: Option<String>,
    /// Whether to show [`TOKEN_WARNING`].
    pub show_token_warning: bool,
    /// Message from the most recent failed fetch.
    pub error: Option<&'a str>,
}

impl<'a> FeedView<'a> {
    /// Pure projection of a snapshot.
    ///
    /// Grid or list follows the layout preference, the load-next control is
    /// replaced by the loading indicator while a fetch is in flight, and the
    /// heading and filters only appear once a page is loaded.
    #[must_use]
    pub fn from_snapshot(snapshot: &FeedSnapshot<'a>) -> Self {
        let preference = snapshot.preference;
        let github = snapshot.github;
        let newest = github.repositories.first();

        Self {
            view_type: preference.view_type,
            date_jump: preference.date_jump,
            pages: &github.repositories,
            heading: newest.map(|page| DateRange {
                start: page.start,
                end: page.end,
            }),
            show_filters: newest.is_some(),
            selected_language: preference.language(),
            loading: github.processing,
            load_next_label: (!github.processing)
                .then(|| format!("Load next {}", preference.date_jump)),
            show_token_warning: preference.token().is_none(),
            error: github.error.as_deref(),
        }
    }

    /// Total repositories across all pages.
    #[must_use]
    pub fn repository_count(&self) -> usize {
        self.pages.iter().map(|page| page.items.len()).sum()
    }
}
