//! Message types for the dashboard update loop.
//!
//! Messages represent user actions, async command results, and system events.

use crate::catalogue::{Product, ProductId, ReviewAction, ReviewView};
use crate::review::{LoadTicket, ReviewOutcome};

/// Messages for the product review dashboard.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move cursor to the previous card.
    CursorUp,
    /// Move cursor to the next card.
    CursorDown,
    /// Move cursor to the first card.
    Home,
    /// Move cursor to the last card.
    End,

    // View switching
    /// Activate the given view.
    SwitchView(ReviewView),
    /// Activate the view that is not currently shown.
    ToggleView,

    // Data loading
    /// Fetch the current view's products again.
    LoadRequested,
    /// A fetch finished successfully.
    ProductsLoaded {
        /// Ticket of the fetch.
        ticket: LoadTicket,
        /// Products in API order.
        products: Vec<Product>,
    },
    /// A fetch failed.
    ProductsFailed {
        /// Ticket of the fetch.
        ticket: LoadTicket,
        /// Human-readable failure.
        message: String,
    },

    // Review actions
    /// Submit a decision for the selected card.
    ReviewRequested(ReviewAction),
    /// The API accepted a decision.
    ReviewSucceeded {
        /// Mount of the pending list the decision was made in.
        mount: u64,
        /// Confirmed outcome.
        outcome: ReviewOutcome,
    },
    /// The API refused a decision or could not be reached.
    ReviewFailed {
        /// Mount of the pending list the decision was made in.
        mount: u64,
        /// Product the decision was for.
        product_id: ProductId,
        /// Human-readable failure.
        message: String,
    },

    // Reason drafting
    /// Start editing the reason for the selected card.
    StartReasonDraft,
    /// Append a character to the reason draft.
    ReasonDraftInsertChar(char),
    /// Delete the last character of the reason draft.
    ReasonDraftBackspace,
    /// Keep the draft as the card's reason.
    ReasonDraftKeep,
    /// Discard the draft.
    ReasonDraftCancel,

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns whether this is a cursor movement message.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp | Self::CursorDown | Self::Home | Self::End
        )
    }

    /// Returns whether this message changes the active view.
    #[must_use]
    pub const fn is_view_switch(&self) -> bool {
        matches!(self, Self::SwitchView(_) | Self::ToggleView)
    }

    /// Returns whether this is a list loading message.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::LoadRequested | Self::ProductsLoaded { .. } | Self::ProductsFailed { .. }
        )
    }

    /// Returns whether this is a review action message.
    #[must_use]
    pub const fn is_review(&self) -> bool {
        matches!(
            self,
            Self::ReviewRequested(_) | Self::ReviewSucceeded { .. } | Self::ReviewFailed { .. }
        )
    }

    /// Returns whether this message edits the reason draft.
    #[must_use]
    pub const fn is_reason_draft(&self) -> bool {
        matches!(
            self,
            Self::StartReasonDraft
                | Self::ReasonDraftInsertChar(_)
                | Self::ReasonDraftBackspace
                | Self::ReasonDraftKeep
                | Self::ReasonDraftCancel
        )
    }
}
