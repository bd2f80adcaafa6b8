//! Language and layout filters shown above the repositories.

use crate::feed::ViewType;

/// Context for rendering the filter bar.
#[derive(Debug, Clone, Copy)]
pub struct FilterBarViewContext<'a> {
    /// Active language filter.
    pub language: Option<&'a str>,
    /// Active layout.
    pub view_type: ViewType,
    /// Repositories loaded so far.
    pub repository_count: usize,
}

/// Renders the filter bar.
#[must_use]
pub fn filter_bar(ctx: &FilterBarViewContext<'_>) -> String {
    let language = ctx.language.unwrap_or("All languages");
    format!(
        "Language: {language} (l)  View: {} (v)  {} repositories\n",
        ctx.view_type, ctx.repository_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_all_languages_when_unfiltered() {
        let bar = filter_bar(&FilterBarViewContext {
            language: None,
            view_type: ViewType::Grid,
            repository_count: 12,
        });

        assert_eq!(
            bar,
            "Language: All languages (l)  View: grid (v)  12 repositories\n"
        );
    }
}
