//! Reason drafting handlers for the pending view.
//!
//! A reason is edited inline on the status line. Keeping it attaches it to
//! the card; the next approve or reject for that card sends it.

use bubbletea_rs::Cmd;

use super::DashboardApp;
use super::review_handlers::REVIEW_OUTSIDE_PENDING;
use crate::tui::messages::AppMsg;
use crate::tui::state::ReasonDraftState;

impl DashboardApp {
    /// Handles reason-drafting messages.
    pub(super) fn handle_reason_draft_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::StartReasonDraft => self.start_reason_draft(),
            AppMsg::ReasonDraftInsertChar(character) => self.insert_reason_character(*character),
            AppMsg::ReasonDraftBackspace => {
                if let Some(draft) = self.reason_draft.as_mut() {
                    draft.backspace();
                }
            }
            AppMsg::ReasonDraftKeep => self.keep_reason_draft(),
            AppMsg::ReasonDraftCancel => {
                self.reason_draft = None;
                self.notice = None;
            }
            _ => {}
        }
        None
    }

    fn start_reason_draft(&mut self) {
        if !self.list.view().accepts_reviews() {
            self.notice = Some(REVIEW_OUTSIDE_PENDING.to_owned());
            return;
        }
        let Some(product_id) = self.selected_product().map(|product| product.id) else {
            self.notice = Some("Select a product before adding a reason".to_owned());
            return;
        };
        if !self.cards.phase(product_id).is_idle() {
            self.notice = Some("A decision for this product is already in flight".to_owned());
            return;
        }

        let existing = self.reasons.get(&product_id).map_or("", String::as_str);
        self.reason_draft = Some(ReasonDraftState::with_text(
            product_id,
            self.context.reason_max_length(),
            existing,
        ));
        self.notice = None;
    }

    fn insert_reason_character(&mut self, character: char) {
        let Some(draft) = self.reason_draft.as_mut() else {
            return;
        };
        match draft.push_char(character) {
            Ok(()) => self.notice = None,
            Err(error) => self.notice = Some(error.to_string()),
        }
    }

    /// Stores the draft as the card's reason; a blank draft clears it.
    fn keep_reason_draft(&mut self) {
        let Some(draft) = self.reason_draft.take() else {
            return;
        };
        match draft.finished_reason() {
            Some(reason) => {
                self.reasons.insert(draft.product_id(), reason);
            }
            None => {
                self.reasons.remove(&draft.product_id());
            }
        }
        self.notice = None;
    }
}
