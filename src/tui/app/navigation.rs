//! Navigation handlers and cursor management.
//!
//! The cursor indexes repositories across every loaded window, so moving
//! past the last repository of one window lands on the first of the next.

use bubbletea_rs::Cmd;

use super::FeedApp;
use crate::tui::messages::AppMsg;

impl FeedApp {
    /// Dispatches navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => self.move_cursor_up(1),
            AppMsg::CursorDown => self.move_cursor_down(1),
            AppMsg::Home => self.cursor_position = 0,
            AppMsg::End => self.cursor_position = self.last_index(),
            _ => {
                // Unreachable: caller filters to navigation messages.
            }
        }
        None
    }

    fn move_cursor_up(&mut self, step: usize) {
        self.cursor_position = self.cursor_position.saturating_sub(step);
    }

    fn move_cursor_down(&mut self, step: usize) {
        self.cursor_position = self
            .cursor_position
            .saturating_add(step)
            .min(self.last_index());
    }

    fn last_index(&self) -> usize {
        self.repository_count().saturating_sub(1)
    }

    /// Keeps the cursor on an existing repository after pages change.
    pub(super) fn clamp_cursor(&mut self) {
        self.cursor_position = self.cursor_position.min(self.last_index());
    }
}
