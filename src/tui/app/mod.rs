//! Main dashboard model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! product review dashboard. It coordinates the list loader, per-card review
//! state, reason drafts, and rendering.
//!
//! # Module Structure
//!
//! - `loading`: View activation and list fetch handling
//! - `review_handlers`: Approve/reject dispatch and reconciliation
//! - `reason_handlers`: Reason draft editing
//! - `navigation`: Cursor movement
//! - `rendering`: View rendering methods for terminal output
//! - `model_impl`: `bubbletea_rs::Model` implementation

use std::collections::HashMap;

use bubbletea_rs::Cmd;

use crate::catalogue::{Product, ProductId, ReviewView};
use crate::review::{CardPhase, CardTracker, ProductListState};

use super::DashboardContext;
use super::components::ProductGridComponent;
use super::input::InputContext;
use super::messages::AppMsg;
use super::state::{CursorState, ReasonDraftState};

mod loading;
mod model_impl;
mod navigation;
mod reason_handlers;
mod rendering;
mod review_handlers;

/// Rows used by the header, count line, spacer, status line, and tab bar.
pub(crate) const CHROME_HEIGHT: usize = 5;

/// Main application model for the product review dashboard.
#[derive(Debug)]
pub struct DashboardApp {
    context: DashboardContext,
    /// Products and load state of the active view.
    pub(crate) list: ProductListState,
    /// Per-card review state (pending view only).
    pub(crate) cards: CardTracker,
    /// Reasons kept for pending cards, sent with the next decision.
    pub(crate) reasons: HashMap<ProductId, String>,
    /// Reason currently being edited.
    pub(crate) reason_draft: Option<ReasonDraftState>,
    /// Cursor and scroll position.
    pub(crate) cursor: CursorState,
    /// ID of the selected product, used to restore the cursor after a fetch.
    selected_id: Option<ProductId>,
    /// Last mount identifier handed out.
    last_mount: u64,
    /// Transient status message.
    pub(crate) notice: Option<String>,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    width: u16,
    height: u16,
    grid: ProductGridComponent,
}

impl DashboardApp {
    /// Creates a dashboard showing the context's initial view.
    ///
    /// No fetch is issued until [`start`](Self::start) is called.
    #[must_use]
    pub fn new(context: DashboardContext) -> Self {
        let initial_view = context.initial_view();
        Self {
            context,
            list: ProductListState::new(initial_view, 1),
            cards: CardTracker::new(),
            reasons: HashMap::new(),
            reason_draft: None,
            cursor: CursorState::new(),
            selected_id: None,
            last_mount: 1,
            notice: None,
            show_help: false,
            width: 80,
            height: 24,
            grid: ProductGridComponent::new(),
        }
    }

    /// Returns the active view.
    #[must_use]
    pub const fn active_view(&self) -> ReviewView {
        self.list.view()
    }

    /// Returns the products of the active view in display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        self.list.products()
    }

    /// Returns the identifiers of the displayed products.
    #[must_use]
    pub fn product_ids(&self) -> Vec<ProductId> {
        self.list.products().iter().map(|product| product.id).collect()
    }

    /// Returns whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.list.is_loading()
    }

    /// Returns the view-level load error, if any.
    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.list.error()
    }

    /// Returns the review phase of a card.
    #[must_use]
    pub fn card_phase(&self, id: ProductId) -> CardPhase {
        self.cards.phase(id)
    }

    /// Returns the card-local error for a product.
    #[must_use]
    pub fn card_error(&self, id: ProductId) -> Option<&str> {
        self.cards.error(id)
    }

    /// Returns the reason kept for a product.
    #[must_use]
    pub fn reason_for(&self, id: ProductId) -> Option<&str> {
        self.reasons.get(&id).map(String::as_str)
    }

    /// Returns the reason draft being edited, if any.
    #[must_use]
    pub const fn reason_draft(&self) -> Option<&ReasonDraftState> {
        self.reason_draft.as_ref()
    }

    /// Returns the transient status message.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Returns whether the help overlay is visible.
    #[must_use]
    pub const fn is_help_visible(&self) -> bool {
        self.show_help
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor.position
    }

    /// Returns the product under the cursor.
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.list.get(self.cursor.position)
    }

    /// Moves the cursor to the product with `id`.
    ///
    /// Returns `false` when the product is not in the active view.
    pub fn select_product(&mut self, id: ProductId) -> bool {
        let Some(index) = self.list.position_of(id) else {
            return false;
        };
        self.set_cursor(index);
        true
    }

    /// Returns the current input context for context-aware key mapping.
    pub(crate) const fn input_context(&self) -> InputContext {
        if self.reason_draft.is_some() {
            InputContext::DraftingReason
        } else {
            InputContext::Browsing
        }
    }

    /// Sets the cursor position and tracks the selected product.
    fn set_cursor(&mut self, position: usize) {
        self.cursor.position = position;
        self.cursor.ensure_visible(self.grid.visible_cards());
        self.update_selected_id();
    }

    /// Clamps the cursor to the list and tracks the selected product.
    fn clamp_cursor_and_update_selection(&mut self) {
        self.cursor.clamp(self.list.len());
        self.cursor.ensure_visible(self.grid.visible_cards());
        self.update_selected_id();
    }

    fn update_selected_id(&mut self) {
        self.selected_id = self.selected_product().map(|product| product.id);
    }

    /// Handles a message and updates state accordingly.
    ///
    /// Delegates to specialised handlers for each message category.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_view_switch() {
            return self.handle_view_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        if msg.is_review() {
            return self.handle_review_msg(msg);
        }
        if msg.is_reason_draft() {
            return self.handle_reason_draft_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.handle_resize(*width, *height);
                None
            }
            _ => None,
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.grid
            .set_visible_rows(usize::from(height).saturating_sub(CHROME_HEIGHT));
        self.cursor.ensure_visible(self.grid.visible_cards());
    }
}
