//! Date window computation for the feed.

use chrono::{DateTime, TimeDelta, Utc};

use super::preference::DateJump;
use crate::github::models::RepositoryPage;

/// A creation-date window `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Lower bound.
    pub start: DateTime<Utc>,
    /// Upper bound.
    pub end: DateTime<Utc>,
}

/// Computes the window to load after `pages`.
///
/// With a previous page the window ends at that page's start and begins one
/// `date_jump` earlier, keeping windows contiguous. Without one the window
/// ends at `now` and starts one `date_jump` before `now` plus one day.
#[must_use]
pub fn next_date_range(
    pages: &[RepositoryPage],
    date_jump: DateJump,
    now: DateTime<Utc>,
) -> DateRange {
    if let Some(last) = pages.last() {
        return DateRange {
            start: date_jump.subtract_from(last.start),
            end: last.start,
        };
    }

    // Offset kept from the web feed; the repeat case has none.
    let tomorrow = now
        .checked_add_signed(TimeDelta::days(1))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    DateRange {
        start: date_jump.subtract_from(tomorrow),
        end: now,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use rstest::{fixture, rstest};

    use super::{DateRange, next_date_range};
    use crate::feed::DateJump;
    use crate::github::models::test_support::page;

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 15, 0, 0)
            .single()
            .expect("valid now")
    }

    fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
            .single()
            .expect("valid instant")
    }

    #[rstest]
    #[case::day(DateJump::Day, at(2026, 10, 16, 15))]
    #[case::week(DateJump::Week, at(2026, 10, 10, 15))]
    #[case::month(DateJump::Month, at(2026, 9, 17, 15))]
    #[case::year(DateJump::Year, at(2025, 10, 17, 15))]
    fn first_window_ends_now(
        now: DateTime<Utc>,
        #[case] jump: DateJump,
        #[case] expected_start: DateTime<Utc>,
    ) {
        let range = next_date_range(&[], jump, now);
        assert_eq!(
            range,
            DateRange {
                start: expected_start,
                end: now
            }
        );
    }

    #[rstest]
    #[case::day(DateJump::Day, at(2026, 10, 8, 0))]
    #[case::week(DateJump::Week, at(2026, 10, 2, 0))]
    #[case::month(DateJump::Month, at(2026, 9, 9, 0))]
    #[case::year(DateJump::Year, at(2025, 10, 9, 0))]
    fn following_window_ends_at_last_page_start(
        now: DateTime<Utc>,
        #[case] jump: DateJump,
        #[case] expected_start: DateTime<Utc>,
    ) {
        let older = page(at(2026, 10, 9, 0), at(2026, 10, 16, 0), Vec::new());
        let pages = vec![page(at(2026, 10, 16, 0), now, Vec::new()), older];

        let range = next_date_range(&pages, jump, now);

        assert_eq!(range.end, at(2026, 10, 9, 0), "window must be contiguous");
        assert_eq!(range.start, expected_start);
    }

    #[rstest]
    fn successive_windows_never_overlap(now: DateTime<Utc>) {
        let mut pages = Vec::new();
        for _ in 0..5 {
            let range = next_date_range(&pages, DateJump::Month, now);
            assert!(range.start < range.end, "window must not be empty");
            if let Some(previous) = pages.last() {
                assert_eq!(range.end, previous.start);
            }
            pages.push(page(range.start, range.end, Vec::new()));
        }
    }
}
