//! Category and status badges shown on product cards.

use crossterm::style::{Color, Stylize};

use crate::catalogue::{ProductCategory, ReviewStatus};

/// Colour scheme for a category badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    /// Badge text colour.
    pub foreground: Color,
}

impl CategoryStyle {
    /// Style used for `other` and any category without its own colour.
    pub const DEFAULT: Self = Self {
        foreground: Color::Grey,
    };

    /// Returns the style for `category`.
    #[must_use]
    pub const fn for_category(category: &ProductCategory) -> Self {
        let foreground = match category {
            ProductCategory::SalesMarketing => Color::Blue,
            ProductCategory::Devtools => Color::Magenta,
            ProductCategory::DataAnalytics => Color::Cyan,
            ProductCategory::Productivity => Color::Green,
            ProductCategory::Finance => Color::Yellow,
            ProductCategory::Other | ProductCategory::Unrecognised(_) => {
                return Self::DEFAULT;
            }
        };
        Self { foreground }
    }
}

/// Renders the category badge (`(sales marketing)`).
#[must_use]
pub fn category_badge(category: &ProductCategory) -> String {
    let style = CategoryStyle::for_category(category);
    format!("({})", category.label())
        .with(style.foreground)
        .to_string()
}

/// Renders the review status badge (`[pending]`).
#[must_use]
pub fn status_badge(status: ReviewStatus) -> String {
    let colour = match status {
        ReviewStatus::Pending => Color::Yellow,
        ReviewStatus::Approved => Color::Green,
        ReviewStatus::Rejected => Color::Red,
        ReviewStatus::Unknown => Color::Grey,
    };
    format!("[{status}]").with(colour).to_string()
}
