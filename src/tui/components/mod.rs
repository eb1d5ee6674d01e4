//! UI components for the product review dashboard.
//!
//! Components are stateless renderers (the grid keeps only its visible
//! height) that turn a view context into terminal text.

mod badges;
mod product_card;
mod product_grid;
mod status_views;
mod text_truncate;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

pub use badges::{CategoryStyle, category_badge, status_badge};
pub use product_card::{ProductCardComponent, ProductCardViewContext, logo_placeholder};
pub use product_grid::{CARD_HEIGHT, ProductGridComponent, ProductGridViewContext};
pub use status_views::{bottom_nav, count_line, empty_state, error_state, loading_state};
