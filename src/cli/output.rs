//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use trendfeed::feed::DateRange;
use trendfeed::{DateJump, FeedError, FeedView, Repository, RepositoryPage, ViewType};

const GRID_COLUMN_WIDTH: usize = 48;

/// Writes every loaded window of `view` to the given writer.
///
/// List layout prints one numbered line per repository; grid layout packs
/// repositories into two fixed-width columns.
///
/// # Errors
///
/// Returns [`FeedError::Io`] when the writer fails.
pub fn write_feed<W: Write>(writer: &mut W, view: &FeedView<'_>) -> Result<(), FeedError> {
    for (index, page) in view.pages.iter().enumerate() {
        if index > 0 {
            writeln!(writer).map_err(|e| io_error(&e))?;
        }
        write_page(writer, page, view.date_jump, view.view_type)?;
    }

    if let Some(error) = view.error {
        writeln!(writer, "Error: {error}").map_err(|e| io_error(&e))?;
    }

    Ok(())
}

fn write_page<W: Write>(
    writer: &mut W,
    page: &RepositoryPage,
    date_jump: DateJump,
    view_type: ViewType,
) -> Result<(), FeedError> {
    let range = DateRange {
        start: page.start,
        end: page.end,
    };
    writeln!(writer, "{}", window_heading(date_jump, &range)).map_err(|e| io_error(&e))?;

    if page.items.is_empty() {
        writeln!(writer, "  (no repositories)").map_err(|e| io_error(&e))?;
        return Ok(());
    }

    match view_type {
        ViewType::List => {
            for (position, repository) in page.items.iter().enumerate() {
                writeln!(writer, "{}", list_line(position + 1, repository))
                    .map_err(|e| io_error(&e))?;
            }
        }
        ViewType::Grid => {
            for row in page.items.chunks(2) {
                let cells: Vec<String> = row.iter().map(grid_cell).collect();
                writeln!(writer, "  {}", cells.join("  ").trim_end()).map_err(|e| io_error(&e))?;
            }
        }
    }

    Ok(())
}

fn window_heading(date_jump: DateJump, range: &DateRange) -> String {
    format!(
        "Trending {date_jump} {}..{}",
        range.start.format("%Y-%m-%d"),
        range.end.format("%Y-%m-%d")
    )
}

fn list_line(position: usize, repository: &Repository) -> String {
    let mut line = format!(
        "  {position}. {}  ★ {}",
        repository.full_name, repository.stargazers_count
    );
    if let Some(language) = &repository.language {
        line.push_str(&format!("  [{language}]"));
    }
    if let Some(description) = repository.description.as_deref().map(first_line) {
        if !description.is_empty() {
            line.push_str("  ");
            line.push_str(description);
        }
    }
    line
}

fn grid_cell(repository: &Repository) -> String {
    let cell = format!(
        "{} ★ {}",
        repository.full_name, repository.stargazers_count
    );
    format!("{cell:<GRID_COLUMN_WIDTH$}")
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default().trim()
}

/// Converts an I/O error to a [`FeedError::Io`].
pub(crate) fn io_error(error: &io::Error) -> FeedError {
    FeedError::Io {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use trendfeed::github::models::test_support::{minimal_repository, page};
    use trendfeed::{DateJump, FeedView, RepositoryPage, ViewType};

    use super::write_feed;

    fn pages() -> Vec<RepositoryPage> {
        let mut described = minimal_repository(1, "octo/rocket", 1200);
        described.language = Some("Rust".to_owned());
        described.description = Some("Fast launches\nsecond line".to_owned());
        vec![
            page(
                Utc.with_ymd_and_hms(2026, 10, 10, 15, 0, 0)
                    .single()
                    .expect("valid instant"),
                Utc.with_ymd_and_hms(2026, 10, 16, 15, 0, 0)
                    .single()
                    .expect("valid instant"),
                vec![described, minimal_repository(2, "octo/plain", 30)],
            ),
            page(
                Utc.with_ymd_and_hms(2026, 10, 3, 15, 0, 0)
                    .single()
                    .expect("valid instant"),
                Utc.with_ymd_and_hms(2026, 10, 10, 15, 0, 0)
                    .single()
                    .expect("valid instant"),
                vec![],
            ),
        ]
    }

    fn view(pages: &[RepositoryPage], view_type: ViewType) -> FeedView<'_> {
        FeedView {
            view_type,
            date_jump: DateJump::Week,
            pages,
            heading: None,
            show_filters: true,
            selected_language: None,
            loading: false,
            load_next_label: Some("Load next week".to_owned()),
            show_token_warning: false,
            error: None,
        }
    }

    fn render(view: &FeedView<'_>) -> String {
        let mut buffer = Vec::new();
        write_feed(&mut buffer, view).expect("should write feed");
        String::from_utf8(buffer).expect("output should be valid UTF-8")
    }

    #[test]
    fn list_layout_numbers_repositories_under_window_headings() {
        let pages = pages();
        let output = render(&view(&pages, ViewType::List));

        assert!(
            output.contains("Trending week 2026-10-10..2026-10-16"),
            "missing first heading: {output}"
        );
        assert!(
            output.contains("  1. octo/rocket  ★ 1200  [Rust]  Fast launches\n"),
            "missing detailed line: {output}"
        );
        assert!(
            output.contains("  2. octo/plain  ★ 30\n"),
            "missing plain line: {output}"
        );
        assert!(
            output.contains("Trending week 2026-10-03..2026-10-10\n  (no repositories)"),
            "empty window should be marked: {output}"
        );
        assert!(!output.contains("second line"), "only first description line");
    }

    #[test]
    fn grid_layout_packs_two_repositories_per_row() {
        let pages = pages();
        let output = render(&view(&pages, ViewType::Grid));

        let row = output
            .lines()
            .find(|line| line.contains("octo/rocket"))
            .expect("grid row should exist");
        assert!(row.contains("octo/plain ★ 30"), "second column missing: {row}");
        assert!(!row.contains("1."), "grid rows are not numbered: {row}");
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some("Bad credentials"), true)]
    fn error_line_follows_windows(#[case] error: Option<&str>, #[case] expected: bool) {
        let pages = pages();
        let mut feed = view(&pages, ViewType::List);
        feed.error = error;

        let output = render(&feed);

        assert_eq!(output.contains("Error: Bad credentials"), expected, "{output}");
    }
}
