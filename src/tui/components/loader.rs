//! The loading indicator and the "load next" control.

/// Renders the loader while fetching, otherwise the load-next control.
#[must_use]
pub fn load_next_control(load_next_label: Option<&str>) -> String {
    load_next_label.map_or_else(
        || "  Loading...\n".to_owned(),
        |label| format!("  [n] {label}\n"),
    )
}
