//! Rendering logic for the trending feed TUI application.
//!
//! This module turns the controller's [`FeedView`] into terminal rows. These
//! are pure query methods that read state without modification.

use super::FeedApp;
use crate::feed::{FeedView, TOKEN_WARNING, ViewType};
use crate::tui::components::{
    FilterBarViewContext, RenderedRepositories, RepositoryGridComponent, RepositoryListComponent,
    RepositoryViewContext, filter_bar, load_next_control, top_nav,
};

impl FeedApp {
    /// Renders the whole feed frame.
    pub(super) fn render_feed(&self) -> String {
        let view = self.feed_view();
        let mut output = String::new();

        output.push_str(&top_nav(view.date_jump, view.loading));
        if view.show_filters {
            output.push_str(&filter_bar(&FilterBarViewContext {
                language: view.selected_language,
                view_type: view.view_type,
                repository_count: view.repository_count(),
            }));
        } else {
            output.push('\n');
        }
        if view.show_token_warning {
            output.push_str(TOKEN_WARNING);
        }
        output.push('\n');

        output.push_str(&self.render_repositories(&view).window(self.body_height()));
        output.push_str(&load_next_control(view.load_next_label.as_deref()));
        output.push_str(&self.render_status_bar(&view));

        output
    }

    /// Lays out the loaded windows in the selected layout.
    fn render_repositories(&self, view: &FeedView<'_>) -> RenderedRepositories {
        let ctx = RepositoryViewContext {
            pages: view.pages,
            date_jump: view.date_jump,
            cursor_position: self.cursor_position,
            max_width: (self.width as usize).max(1),
        };
        match view.view_type {
            ViewType::Grid => RepositoryGridComponent::view(&ctx),
            ViewType::List => RepositoryListComponent::view(&ctx),
        }
    }

    /// Renders the status bar: the last error, the selected URL, or hints.
    fn render_status_bar(&self, view: &FeedView<'_>) -> String {
        if let Some(error) = view.error {
            return format!("Error: {error}\n");
        }

        if let Some(url) = self
            .selected_repository()
            .and_then(|repository| repository.html_url.as_deref())
        {
            return format!("{url}  ?:help  q:quit\n");
        }

        format!("{}\n", self.status_hints())
    }

    const fn status_hints(&self) -> &'static str {
        if self.width <= 80 {
            "q:quit  ?:help  n:next  l:language  d:window"
        } else {
            "j/k:move  n:load next  l:language  d:window  v:grid/list  ?:help  q:quit"
        }
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Navigation:
  j, Down    Move cursor down
  k, Up      Move cursor up
  Home, g    Go to first repository
  End, G     Go to last repository

Feed:
  n, Enter   Load the next (older) window
  l          Cycle language filter
  d          Cycle window (day/week/month/year)
  v          Toggle grid/list layout

Other:
  ?          Toggle this help
  q, Esc     Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}
