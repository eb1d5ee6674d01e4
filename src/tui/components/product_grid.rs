//! Scrollable grid of product cards.

use std::collections::HashMap;

use crate::catalogue::{Product, ProductId};
use crate::review::CardTracker;

use super::product_card::{ProductCardComponent, ProductCardViewContext};

/// Approximate rows one card occupies, including the separator line.
pub const CARD_HEIGHT: usize = 6;

/// Default number of cards shown at once.
const DEFAULT_VISIBLE_CARDS: usize = 3;

/// Context for rendering the grid.
#[derive(Debug, Clone, Copy)]
pub struct ProductGridViewContext<'a> {
    /// Products in display order.
    pub products: &'a [Product],
    /// Index of the selected card.
    pub cursor_position: usize,
    /// Index of the first visible card.
    pub scroll_offset: usize,
    /// Whether review actions are offered.
    pub show_actions: bool,
    /// Per-card review state.
    pub cards: &'a CardTracker,
    /// Reasons kept for cards.
    pub reasons: &'a HashMap<ProductId, String>,
    /// Terminal width in columns.
    pub max_width: usize,
}

/// Component rendering the visible window of product cards.
#[derive(Debug, Clone)]
pub struct ProductGridComponent {
    visible_cards: usize,
}

impl Default for ProductGridComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductGridComponent {
    /// Creates a grid showing the default number of cards.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_cards: DEFAULT_VISIBLE_CARDS,
        }
    }

    /// Sets how many cards fit in `rows` terminal rows; at least one.
    pub fn set_visible_rows(&mut self, rows: usize) {
        self.visible_cards = rows.checked_div(CARD_HEIGHT).unwrap_or(0).max(1);
    }

    /// Returns how many cards are shown at once.
    #[must_use]
    pub const fn visible_cards(&self) -> usize {
        self.visible_cards
    }

    /// Renders the cards in the visible window.
    #[must_use]
    pub fn view(&self, ctx: &ProductGridViewContext<'_>) -> String {
        let mut output = String::new();

        for (index, product) in ctx
            .products
            .iter()
            .enumerate()
            .skip(ctx.scroll_offset)
            .take(self.visible_cards)
        {
            let card = ProductCardViewContext {
                product,
                selected: index == ctx.cursor_position,
                show_actions: ctx.show_actions,
                phase: ctx.cards.phase(product.id),
                error: ctx.cards.error(product.id),
                reason: ctx.reasons.get(&product.id).map(String::as_str),
                max_width: ctx.max_width,
            };
            output.push_str(&ProductCardComponent::view(&card));
            output.push('\n');
        }

        let hidden = ctx
            .products
            .len()
            .saturating_sub(ctx.scroll_offset.saturating_add(self.visible_cards));
        if hidden > 0 {
            output.push_str(&format!("  ... {hidden} more\n"));
        }

        output
    }
}
