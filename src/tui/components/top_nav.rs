//! Title bar with the window-width tabs.

use crate::feed::DateJump;

/// Renders the title and the date jump tabs, highlighting the selection.
#[must_use]
pub fn top_nav(selected: DateJump, loading: bool) -> String {
    let tabs = DateJump::ALL
        .iter()
        .map(|jump| {
            if *jump == selected {
                format!("[{jump}]")
            } else {
                format!(" {jump} ")
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let loading_indicator = if loading { " [Loading...]" } else { "" };
    format!("trendfeed  {tabs}{loading_indicator}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_selected_tab() {
        let nav = top_nav(DateJump::Month, false);

        assert!(nav.contains("[month]"));
        assert!(nav.contains(" week "));
        assert!(!nav.contains("Loading"));
    }

    #[test]
    fn shows_loading_indicator() {
        assert!(top_nav(DateJump::Week, true).contains("[Loading...]"));
    }
}
