//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages.

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Char('q') | KeyCode::Esc => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Char('n') | KeyCode::Enter => Some(AppMsg::LoadNext),
        KeyCode::Char('l') => Some(AppMsg::CycleLanguage),
        KeyCode::Char('d') => Some(AppMsg::CycleDateJump),
        KeyCode::Char('v') => Some(AppMsg::ToggleViewType),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use bubbletea_rs::event::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};
    use rstest::rstest;

    use super::map_key_to_message;
    use crate::tui::messages::AppMsg;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[rstest]
    #[case::load_next(KeyCode::Char('n'), "LoadNext")]
    #[case::language(KeyCode::Char('l'), "CycleLanguage")]
    #[case::date_jump(KeyCode::Char('d'), "CycleDateJump")]
    #[case::view(KeyCode::Char('v'), "ToggleViewType")]
    #[case::down(KeyCode::Down, "CursorDown")]
    #[case::up(KeyCode::Char('k'), "CursorUp")]
    #[case::last(KeyCode::Char('G'), "End")]
    #[case::quit(KeyCode::Char('q'), "Quit")]
    fn maps_feed_keys(#[case] code: KeyCode, #[case] expected: &str) {
        let message = map_key_to_message(&key(code)).expect("key should be mapped");

        assert_eq!(format!("{message:?}"), expected);
    }

    #[test]
    fn ignores_unbound_keys() {
        assert!(map_key_to_message(&key(KeyCode::Char('z'))).is_none());
    }

    #[test]
    fn feed_controls_are_classified() {
        assert!(AppMsg::LoadNext.is_feed_control());
        assert!(!AppMsg::LoadNext.is_navigation());
        assert!(AppMsg::Home.is_navigation());
    }
}
