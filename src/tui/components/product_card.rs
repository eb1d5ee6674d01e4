//! Product card component.
//!
//! A card shows the logo placeholder, name, category and status badges,
//! description, website, and (in the pending view) the review actions.

use crossterm::style::{Color, Stylize};

use crate::catalogue::Product;
use crate::review::CardPhase;

use super::badges::{category_badge, status_badge};
use super::text_truncate::truncate_line;

/// Left indent of every card line after the first.
const INDENT: &str = "    ";

/// Data needed to render one card.
#[derive(Debug, Clone, Copy)]
pub struct ProductCardViewContext<'a> {
    /// Product to render.
    pub product: &'a Product,
    /// Whether the cursor is on this card.
    pub selected: bool,
    /// Whether approve/reject are offered (pending view only).
    pub show_actions: bool,
    /// Review phase of the card.
    pub phase: CardPhase,
    /// Card-local error from the last failed decision.
    pub error: Option<&'a str>,
    /// Reason that will accompany the next decision.
    pub reason: Option<&'a str>,
    /// Terminal width in columns.
    pub max_width: usize,
}

/// Stateless renderer for product cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductCardComponent;

impl ProductCardComponent {
    /// Renders the card, one line per row, each ending in a newline.
    #[must_use]
    pub fn view(ctx: &ProductCardViewContext<'_>) -> String {
        let text_width = ctx.max_width.saturating_sub(INDENT.len()).max(1);
        let mut output = String::new();

        output.push_str(&Self::title_line(ctx, text_width));
        output.push_str(&format!(
            "{INDENT}{} {}\n",
            category_badge(&ctx.product.category),
            status_badge(ctx.product.status)
        ));

        let description = ctx.product.description.trim();
        if !description.is_empty() {
            output.push_str(&format!(
                "{INDENT}{}\n",
                truncate_line(description, text_width)
            ));
        }
        if let Some(website) = ctx.product.website.as_deref().filter(|url| !url.is_empty()) {
            output.push_str(&format!("{INDENT}{}\n", truncate_line(website, text_width)));
        }
        if ctx.show_actions {
            output.push_str(&format!("{INDENT}{}\n", Self::actions(ctx.phase)));
        }
        if let Some(reason) = ctx.reason {
            let line = truncate_line(&format!("Reason: {reason}"), text_width);
            output.push_str(&format!("{INDENT}{line}\n"));
        }
        if let Some(error) = ctx.error {
            let line = truncate_line(&format!("! {error}"), text_width);
            output.push_str(&format!("{INDENT}{}\n", line.with(Color::Red)));
        }

        output
    }

    fn title_line(ctx: &ProductCardViewContext<'_>, text_width: usize) -> String {
        let prefix = if ctx.selected { ">" } else { " " };
        let logo = logo_placeholder(ctx.product);
        let name = truncate_line(&ctx.product.name, text_width);
        let styled_name = if ctx.selected {
            name.bold().to_string()
        } else {
            name
        };
        format!("{prefix} {logo} {styled_name}\n")
    }

    fn actions(phase: CardPhase) -> String {
        match phase {
            CardPhase::Idle => format!(
                "{}  {}",
                "[a] Approve".with(Color::Green),
                "[x] Reject".with(Color::Red)
            ),
            CardPhase::Acting(action) => format!("{}...", action.progress_label())
                .with(Color::DarkGrey)
                .to_string(),
        }
    }
}

/// Returns the monogram shown in place of the product logo.
///
/// Terminals cannot show the logo image, so every card uses the first letter
/// of the product name; `?` when the name is blank.
#[must_use]
pub fn logo_placeholder(product: &Product) -> String {
    let initial = product
        .name
        .trim()
        .chars()
        .next()
        .map_or('?', |character| character.to_ascii_uppercase());
    format!("[{initial}]")
}
