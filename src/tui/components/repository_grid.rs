//! Grid layout: two-line cards laid out in as many columns as fit.

use super::text_truncate::{first_line, fit_to_display_width};
use super::{RenderedRepositories, RepositoryViewContext, group_heading};
use crate::github::models::Repository;

/// Width of one card including its separator.
const CARD_WIDTH: usize = 40;

/// Component for the grid layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepositoryGridComponent;

impl RepositoryGridComponent {
    /// Number of card columns that fit in `max_width`.
    #[must_use]
    pub fn columns(max_width: usize) -> usize {
        max_width.checked_div(CARD_WIDTH).unwrap_or(1).max(1)
    }

    /// Renders every loaded window.
    #[must_use]
    pub fn view(ctx: &RepositoryViewContext<'_>) -> RenderedRepositories {
        let columns = Self::columns(ctx.max_width);
        let card_width = CARD_WIDTH.min(ctx.max_width).saturating_sub(1).max(1);
        let mut rendered = RenderedRepositories::default();
        let mut repository_index = 0_usize;

        for (page_index, page) in ctx.pages.iter().enumerate() {
            rendered.lines.push(group_heading(
                ctx.date_jump,
                page_index,
                page.start,
                page.end,
            ));
            if page.items.is_empty() {
                rendered
                    .lines
                    .push("  No repositories were created in this window.".to_owned());
            }

            for row in page.items.chunks(columns) {
                let mut title_line = String::new();
                let mut detail_line = String::new();
                for repository in row {
                    let is_selected = repository_index == ctx.cursor_position;
                    if is_selected {
                        rendered.selected_line = Some(rendered.lines.len());
                    }
                    let (title, detail) = Self::format_card(repository, is_selected);
                    title_line.push_str(&fit_to_display_width(&title, card_width));
                    title_line.push(' ');
                    detail_line.push_str(&fit_to_display_width(&detail, card_width));
                    detail_line.push(' ');
                    repository_index = repository_index.saturating_add(1);
                }
                rendered.lines.push(title_line.trim_end().to_owned());
                rendered.lines.push(detail_line.trim_end().to_owned());
            }
        }

        rendered
    }

    fn format_card(repository: &Repository, is_selected: bool) -> (String, String) {
        let prefix = if is_selected { ">" } else { " " };
        let title = format!("{prefix} {}", repository.full_name);

        let language = repository.language.as_deref().unwrap_or("-");
        let description = repository
            .description
            .as_deref()
            .map(first_line)
            .unwrap_or_default();
        let detail = format!(
            "  ★ {} {language} {description}",
            repository.stargazers_count
        );
        (title, detail)
    }
}
