//! Approve and reject handling for the pending view.
//!
//! A decision is dispatched only when the selected card is idle. The
//! outcome message carries the mount it was issued for so that results
//! arriving after the view was left are dropped.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::DashboardApp;
use crate::catalogue::{ProductId, ReviewAction, ReviewDecision};
use crate::review::{ReviewOutcome, dispatch_review};
use crate::tui::messages::AppMsg;

/// Notice shown when review keys are pressed outside the pending view.
pub(super) const REVIEW_OUTSIDE_PENDING: &str = "Switch to the Pending view to review products";

impl DashboardApp {
    /// Dispatches review action messages to their handlers.
    pub(super) fn handle_review_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::ReviewRequested(action) => self.handle_review_requested(*action),
            AppMsg::ReviewSucceeded { mount, outcome } => {
                self.handle_review_succeeded(*mount, outcome)
            }
            AppMsg::ReviewFailed {
                mount,
                product_id,
                message,
            } => self.handle_review_failed(*mount, *product_id, message),
            _ => None,
        }
    }

    /// Starts a decision for the selected card.
    ///
    /// Ignored while the card already has a decision in flight.
    fn handle_review_requested(&mut self, action: ReviewAction) -> Option<Cmd> {
        if !self.list.view().accepts_reviews() {
            self.notice = Some(REVIEW_OUTSIDE_PENDING.to_owned());
            return None;
        }

        let product_id = self.selected_product()?.id;
        if !self.cards.try_begin(product_id, action) {
            tracing::debug!(%product_id, "decision already in flight");
            return None;
        }

        self.notice = None;
        let reason = self.reasons.get(&product_id).cloned();
        let decision = ReviewDecision::new(product_id, action, reason);
        Some(self.review_cmd(decision))
    }

    fn review_cmd(&self, decision: ReviewDecision) -> Cmd {
        let gateway = self.context.gateway();
        let telemetry = self.context.telemetry();
        let mount = self.list.mount();
        Box::pin(async move {
            let msg = match dispatch_review(gateway.as_ref(), &decision, telemetry.as_ref()).await
            {
                Ok(outcome) => AppMsg::ReviewSucceeded { mount, outcome },
                Err(error) => AppMsg::ReviewFailed {
                    mount,
                    product_id: decision.product_id(),
                    message: error.to_string(),
                },
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        })
    }

    /// Removes the reviewed card from the pending list.
    ///
    /// A fetch still in flight was issued before the decision landed and may
    /// list the product again, so it is superseded by a fresh one.
    fn handle_review_succeeded(&mut self, mount: u64, outcome: &ReviewOutcome) -> Option<Cmd> {
        if mount != self.list.mount() {
            tracing::debug!(product_id = %outcome.product_id, "ignoring outcome for unmounted list");
            return None;
        }

        let product_id = outcome.product_id;
        let name = self
            .list
            .position_of(product_id)
            .and_then(|index| self.list.get(index))
            .map_or_else(|| format!("Product {product_id}"), |product| product.name.clone());

        self.cards.complete_success(product_id);
        self.reasons.remove(&product_id);
        if self
            .reason_draft
            .as_ref()
            .is_some_and(|draft| draft.product_id() == product_id)
        {
            self.reason_draft = None;
        }

        if self.list.reconcile(outcome) {
            self.notice = Some(format!("{name} {}", outcome.status));
        }
        self.clamp_cursor_and_update_selection();

        if self.list.is_loading() {
            tracing::debug!(%product_id, "refetching after review outcome");
            return Some(self.start());
        }
        None
    }

    /// Returns the card to idle and shows the failure on it.
    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    fn handle_review_failed(
        &mut self,
        mount: u64,
        product_id: ProductId,
        message: &str,
    ) -> Option<Cmd> {
        if mount != self.list.mount() {
            tracing::debug!(%product_id, "ignoring failure for unmounted list");
            return None;
        }

        self.cards.complete_failure(product_id, message.to_owned());
        None
    }
}
