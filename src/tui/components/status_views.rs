//! Count line, empty, loading, and error states, plus the bottom tab bar.

use crossterm::style::{Color, Stylize};

use crate::catalogue::ReviewView;

/// Renders the count line (`2 Pending Products`).
#[must_use]
pub fn count_line(count: usize, view: ReviewView) -> String {
    format!("{count} {} Products\n", view.label())
}

/// Renders the message shown when a view has no products.
#[must_use]
pub fn empty_state(view: ReviewView) -> String {
    let detail = match view {
        ReviewView::Pending => {
            "All products have been processed or there are no pending items."
        }
        ReviewView::Approved => "There are no approved products yet.",
    };
    format!("\n  No {} Products\n  {detail}\n", view.label())
}

/// Renders the loading placeholder shown before the first fetch finishes.
#[must_use]
pub fn loading_state(view: ReviewView) -> String {
    format!(
        "\n  Loading {} products...\n",
        view.label().to_ascii_lowercase()
    )
}

/// Renders the view-level error state.
#[must_use]
pub fn error_state(message: &str) -> String {
    format!(
        "\n  {}\n  {message}\n  Press r to try again.\n",
        "Error Loading Products".with(Color::Red).bold()
    )
}

/// Renders the bottom navigation with the active tab highlighted.
#[must_use]
pub fn bottom_nav(active: ReviewView) -> String {
    let tabs: Vec<String> = ReviewView::ALL
        .iter()
        .enumerate()
        .map(|(index, view)| {
            let label = format!(" {} {} ", index.saturating_add(1), view.label());
            if *view == active {
                label.on(Color::Blue).with(Color::White).bold().to_string()
            } else {
                label
            }
        })
        .collect();
    format!("{}\n", tabs.join("|"))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{bottom_nav, count_line, empty_state, error_state};
    use crate::catalogue::ReviewView;
    use crate::tui::components::test_utils::strip_ansi_codes;

    #[rstest]
    #[case::pending(ReviewView::Pending, 2, "2 Pending Products\n")]
    #[case::approved(ReviewView::Approved, 0, "0 Approved Products\n")]
    fn count_line_names_view(
        #[case] view: ReviewView,
        #[case] count: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(count_line(count, view), expected);
    }

    #[rstest]
    #[case::pending(ReviewView::Pending, "No Pending Products")]
    #[case::approved(ReviewView::Approved, "There are no approved products yet.")]
    fn empty_state_is_view_specific(#[case] view: ReviewView, #[case] expected: &str) {
        assert!(empty_state(view).contains(expected));
    }

    #[rstest]
    fn error_state_offers_retry() {
        let output = strip_ansi_codes(&error_state("status 500"));

        assert!(output.contains("Error Loading Products"));
        assert!(output.contains("status 500"));
        assert!(output.contains("Press r to try again."));
    }

    #[rstest]
    fn bottom_nav_lists_approved_then_pending() {
        let output = strip_ansi_codes(&bottom_nav(ReviewView::Pending));

        assert_eq!(output, " 1 Approved | 2 Pending \n");
    }

    #[rstest]
    fn bottom_nav_highlights_active_tab() {
        let output = bottom_nav(ReviewView::Approved);
        let active_segment = output.split('|').next().unwrap_or_default();

        assert!(active_segment.contains('\x1b'), "active tab should be styled");
        assert!(!output.split('|').nth(1).unwrap_or_default().contains('\x1b'));
    }
}
