//! Heading drawn above each loaded window.

use chrono::{DateTime, Utc};

use crate::feed::DateJump;

const DATE_FORMAT: &str = "%b %d, %Y";

/// Describes a window relative to the present.
///
/// The first window is "This week" (or "Today" for day windows), the second
/// "Last week" (or "Yesterday"), and older ones "3 weeks ago".
#[must_use]
pub fn relative_title(date_jump: DateJump, index: usize) -> String {
    match (index, date_jump) {
        (0, DateJump::Day) => "Today".to_owned(),
        (0, jump) => format!("This {jump}"),
        (1, DateJump::Day) => "Yesterday".to_owned(),
        (1, jump) => format!("Last {jump}"),
        (count, jump) => format!("{count} {jump}s ago"),
    }
}

/// Formats the heading line for one window.
#[must_use]
pub fn group_heading(
    date_jump: DateJump,
    index: usize,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> String {
    format!(
        "{}  {} - {}",
        relative_title(date_jump, index),
        start.format(DATE_FORMAT),
        end.format(DATE_FORMAT)
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::today(DateJump::Day, 0, "Today")]
    #[case::yesterday(DateJump::Day, 1, "Yesterday")]
    #[case::this_week(DateJump::Week, 0, "This week")]
    #[case::last_month(DateJump::Month, 1, "Last month")]
    #[case::older(DateJump::Year, 4, "4 years ago")]
    fn relative_titles(#[case] jump: DateJump, #[case] index: usize, #[case] expected: &str) {
        assert_eq!(relative_title(jump, index), expected);
    }

    #[test]
    fn heading_includes_both_bounds() {
        let start = Utc
            .with_ymd_and_hms(2026, 10, 9, 0, 0, 0)
            .single()
            .expect("valid instant");
        let end = Utc
            .with_ymd_and_hms(2026, 10, 16, 0, 0, 0)
            .single()
            .expect("valid instant");

        assert_eq!(
            group_heading(DateJump::Week, 0, start, end),
            "This week  Oct 09, 2026 - Oct 16, 2026"
        );
    }
}
