//! Test helpers for constructing `Repository` and `RepositoryPage` fixtures.
//!
//! # Examples
//!
//! ```
//! use trendfeed::github::models::test_support::minimal_repository;
//!
//! let repository = minimal_repository(1, "octo/cat", 42);
//! assert_eq!(repository.name, "cat");
//! assert_eq!(repository.stargazers_count, 42);
//! ```

use chrono::{DateTime, Utc};

use super::{Repository, RepositoryPage};

/// Constructs a `Repository` with only id, full name, and star count set.
///
/// The owner login and short name are derived from `full_name`; every other
/// optional field is `None`.
#[must_use]
pub fn minimal_repository(id: u64, full_name: &str, stars: u64) -> Repository {
    let (owner, name) = full_name.split_once('/').unwrap_or(("", full_name));
    Repository {
        id,
        name: name.to_owned(),
        full_name: full_name.to_owned(),
        owner_login: (!owner.is_empty()).then(|| owner.to_owned()),
        description: None,
        language: None,
        html_url: Some(format!("https://github.com/{full_name}")),
        stargazers_count: stars,
        forks_count: 0,
        open_issues_count: 0,
        created_at: None,
    }
}

/// Constructs a page spanning `start..end` containing `items`.
#[must_use]
pub fn page(start: DateTime<Utc>, end: DateTime<Utc>, items: Vec<Repository>) -> RepositoryPage {
    RepositoryPage { start, end, items }
}
