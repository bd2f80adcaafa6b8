//! User preferences that drive the feed.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Months, TimeDelta, Utc};

use crate::github::error::FeedError;

/// Languages offered when cycling the language filter, after "all".
pub const POPULAR_LANGUAGES: &[&str] = &[
    "rust",
    "go",
    "python",
    "javascript",
    "typescript",
    "java",
    "c++",
    "c",
    "ruby",
    "swift",
    "kotlin",
    "zig",
];

/// Width of one feed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateJump {
    /// One calendar day.
    Day,
    /// Seven days.
    #[default]
    Week,
    /// One calendar month.
    Month,
    /// One calendar year.
    Year,
}

impl DateJump {
    /// All date jumps, narrowest first.
    pub const ALL: [Self; 4] = [Self::Day, Self::Week, Self::Month, Self::Year];

    /// Returns the lowercase unit name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Returns the next wider unit, wrapping from `Year` to `Day`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Day => Self::Week,
            Self::Week => Self::Month,
            Self::Month => Self::Year,
            Self::Year => Self::Day,
        }
    }

    /// Moves `instant` one unit back in time.
    ///
    /// Calendar units clamp to the last day of shorter months, so 31 March
    /// minus one month is the last day of February. Results saturate at the
    /// earliest representable instant.
    #[must_use]
    pub fn subtract_from(self, instant: DateTime<Utc>) -> DateTime<Utc> {
        let moved = match self {
            Self::Day => instant.checked_sub_signed(TimeDelta::days(1)),
            Self::Week => instant.checked_sub_signed(TimeDelta::weeks(1)),
            Self::Month => instant.checked_sub_months(Months::new(1)),
            Self::Year => instant.checked_sub_months(Months::new(12)),
        };
        moved.unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

impl fmt::Display for DateJump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateJump {
    type Err = FeedError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "day" | "daily" => Ok(Self::Day),
            "week" | "weekly" => Ok(Self::Week),
            "month" | "monthly" => Ok(Self::Month),
            "year" | "yearly" => Ok(Self::Year),
            _ => Err(FeedError::InvalidDateJump {
                value: value.to_owned(),
            }),
        }
    }
}

/// How repositories are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewType {
    /// Cards arranged in columns.
    #[default]
    Grid,
    /// One repository per row.
    List,
}

impl ViewType {
    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }

    /// Returns the other layout.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewType {
    type Err = FeedError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            _ => Err(FeedError::InvalidViewType {
                value: value.to_owned(),
            }),
        }
    }
}

/// Optional settings carried alongside the feed preferences.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreferenceOptions {
    /// Personal access token used to raise the search rate limit.
    pub token: Option<String>,
}

/// Feed preferences.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Preference {
    /// Language filter; `None` shows every language.
    pub language: Option<String>,
    /// Width of each window.
    pub date_jump: DateJump,
    /// Layout used to render repositories.
    pub view_type: ViewType,
    /// Additional options.
    pub options: PreferenceOptions,
}

/// The preference fields whose change restarts the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchKey {
    /// Language filter.
    pub language: Option<String>,
    /// Window width.
    pub date_jump: DateJump,
}

impl Preference {
    /// Returns the fields that require a re-fetch when they change.
    ///
    /// Blank languages count as "all languages", matching the filters built
    /// for a fetch.
    #[must_use]
    pub fn fetch_key(&self) -> FetchKey {
        FetchKey {
            language: self.language().map(ToOwned::to_owned),
            date_jump: self.date_jump,
        }
    }

    /// The configured token, ignoring blank values.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        non_blank(self.options.token.as_deref())
    }

    /// The language filter, ignoring blank values.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        non_blank(self.language.as_deref())
    }
}

/// Returns the language after `current` in [`POPULAR_LANGUAGES`].
///
/// `None` ("all languages") advances to the first entry, the last entry and
/// any language not in the list wrap back to `None`.
#[must_use]
pub fn next_language(current: Option<&str>) -> Option<String> {
    let Some(language) = non_blank(current) else {
        return POPULAR_LANGUAGES.first().map(|first| (*first).to_owned());
    };

    POPULAR_LANGUAGES
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(language))
        .and_then(|index| POPULAR_LANGUAGES.get(index + 1))
        .map(|next| (*next).to_owned())
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|inner| !inner.trim().is_empty())
}
