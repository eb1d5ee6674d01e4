//! State management for the dashboard.
//!
//! This module provides the cursor over the product grid and the editable
//! reason draft for a selected card.

mod cursor;
mod reason_draft;

pub use cursor::CursorState;
pub use reason_draft::{ReasonDraftError, ReasonDraftState};
