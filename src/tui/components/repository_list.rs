//! List layout: one line per repository under each window's heading.

use super::text_truncate::{first_line, truncate_to_display_width_with_ellipsis};
use super::{RenderedRepositories, RepositoryViewContext, group_heading};
use crate::github::models::Repository;

/// Component for the list layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepositoryListComponent;

impl RepositoryListComponent {
    /// Renders every loaded window.
    #[must_use]
    pub fn view(ctx: &RepositoryViewContext<'_>) -> RenderedRepositories {
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

            for repository in &page.items {
                let is_selected = repository_index == ctx.cursor_position;
                if is_selected {
                    rendered.selected_line = Some(rendered.lines.len());
                }
                let prefix = if is_selected { ">" } else { " " };
                rendered.lines.push(truncate_to_display_width_with_ellipsis(
                    &Self::format_repository_line(repository, prefix),
                    ctx.max_width,
                ));
                repository_index = repository_index.saturating_add(1);
            }
        }

        rendered
    }

    /// Formats a single repository line for display.
    fn format_repository_line(repository: &Repository, prefix: &str) -> String {
        let language = repository
            .language
            .as_deref()
            .map_or_else(String::new, |language| format!("  [{language}]"));
        let description = repository
            .description
            .as_deref()
            .map(first_line)
            .filter(|description| !description.is_empty())
            .map_or_else(String::new, |description| format!("  {description}"));

        format!(
            "{prefix} {}  ★ {}  ⑂ {}{language}{description}",
            repository.full_name, repository.stargazers_count, repository.forks_count
        )
    }
}
