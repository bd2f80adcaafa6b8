//! Width helpers for fixed-width terminal rows.
//!
//! Widths are measured in terminal columns, not Unicode scalar count, so
//! CJK names and emoji in descriptions line up with ASCII ones.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

enum WidthTruncationDecision {
    Empty,
    Unchanged,
    DotFallback,
    Ellipsis,
}

const fn is_zero_width(max_width: usize) -> bool {
    max_width == 0
}

fn fits_display_width(text: &str, max_width: usize) -> bool {
    text.width() <= max_width
}

const fn should_use_dot_fallback(max_width: usize) -> bool {
    max_width <= 3
}

fn width_truncation_decision(text: &str, max_width: usize) -> WidthTruncationDecision {
    if is_zero_width(max_width) {
        WidthTruncationDecision::Empty
    } else if fits_display_width(text, max_width) {
        WidthTruncationDecision::Unchanged
    } else if should_use_dot_fallback(max_width) {
        WidthTruncationDecision::DotFallback
    } else {
        WidthTruncationDecision::Ellipsis
    }
}

/// Truncates text to the provided display width and appends an ellipsis.
pub(crate) fn truncate_to_display_width_with_ellipsis(text: &str, max_width: usize) -> String {
    match width_truncation_decision(text, max_width) {
        WidthTruncationDecision::Empty => String::new(),
        WidthTruncationDecision::Unchanged => text.to_owned(),
        WidthTruncationDecision::DotFallback => ".".repeat(max_width),
        WidthTruncationDecision::Ellipsis => {
            let target_width = max_width.saturating_sub(3);
            let mut truncated = String::new();
            let mut current_width = 0_usize;
            for ch in text.chars() {
                let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                if current_width.saturating_add(char_width) > target_width {
                    break;
                }
                truncated.push(ch);
                current_width = current_width.saturating_add(char_width);
            }
            format!("{truncated}...")
        }
    }
}

/// Truncates or right-pads text to exactly `width` columns.
pub(crate) fn fit_to_display_width(text: &str, width: usize) -> String {
    let mut fitted = truncate_to_display_width_with_ellipsis(text, width);
    let padding = width.saturating_sub(fitted.width());
    fitted.push_str(&" ".repeat(padding));
    fitted
}

/// First line of `text`, trimmed.
pub(crate) fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("").trim()
}
