//! UI components for the trending feed TUI.
//!
//! Components are pure functions of a view context. The repository layouts
//! return whole lines plus the line holding the cursor so the app can scroll
//! the body without the components knowing the terminal height.

mod filter_bar;
mod group_heading;
mod loader;
mod repository_grid;
mod repository_list;
pub(crate) mod text_truncate;
mod top_nav;

use crate::feed::DateJump;
use crate::github::models::RepositoryPage;

pub use filter_bar::{FilterBarViewContext, filter_bar};
pub use group_heading::{group_heading, relative_title};
pub use loader::load_next_control;
pub use repository_grid::RepositoryGridComponent;
pub use repository_list::RepositoryListComponent;
pub use top_nav::top_nav;

/// Context shared by the grid and list layouts.
#[derive(Debug, Clone, Copy)]
pub struct RepositoryViewContext<'a> {
    /// Loaded windows, newest first.
    pub pages: &'a [RepositoryPage],
    /// Window width, used for the group headings.
    pub date_jump: DateJump,
    /// Index of the selected repository across all pages.
    pub cursor_position: usize,
    /// Terminal width in columns.
    pub max_width: usize,
}

/// Lines produced by a repository layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedRepositories {
    /// Rendered lines without trailing newlines.
    pub lines: Vec<String>,
    /// Line on which the selected repository starts.
    pub selected_line: Option<usize>,
}

impl RenderedRepositories {
    /// Returns at most `height` lines, scrolled so the selection is visible.
    #[must_use]
    pub fn window(&self, height: usize) -> String {
        let selected = self.selected_line.unwrap_or(0);
        let first = selected.saturating_add(1).saturating_sub(height);

        let mut output = String::new();
        for line in self.lines.iter().skip(first).take(height) {
            output.push_str(line);
            output.push('\n');
        }
        output
    }
}
