//! Per-card review state for the pending view.
//!
//! A card is `Idle` until a decision is dispatched, then `Acting` until the
//! API answers. Success removes the card from the list (see
//! [`super::ProductListState::reconcile`]); failure returns it to `Idle` with
//! a card-local error message.

use std::collections::HashMap;

use crate::catalogue::models::{ProductId, ReviewAction};

/// Review phase of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    /// Both actions are available.
    Idle,
    /// A decision is in flight; both actions are disabled.
    Acting(ReviewAction),
}

impl CardPhase {
    /// Returns whether review actions are currently allowed.
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Tracks in-flight decisions and card-local errors.
#[derive(Debug, Clone, Default)]
pub struct CardTracker {
    acting: HashMap<ProductId, ReviewAction>,
    errors: HashMap<ProductId, String>,
}

impl CardTracker {
    /// Creates a tracker with every card idle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the phase of the card for `id`.
    #[must_use]
    pub fn phase(&self, id: ProductId) -> CardPhase {
        self.acting
            .get(&id)
            .copied()
            .map_or(CardPhase::Idle, CardPhase::Acting)
    }

    /// Moves an idle card into `Acting(action)`.
    ///
    /// Returns `false` without changing anything when the card already has a
    /// decision in flight. A previous error for the card is cleared.
    pub fn try_begin(&mut self, id: ProductId, action: ReviewAction) -> bool {
        if self.acting.contains_key(&id) {
            return false;
        }
        self.acting.insert(id, action);
        self.errors.remove(&id);
        true
    }

    /// Finishes a successful decision. The card leaves the list.
    pub fn complete_success(&mut self, id: ProductId) {
        self.acting.remove(&id);
        self.errors.remove(&id);
    }

    /// Finishes a failed decision, returning the card to `Idle` with an error.
    pub fn complete_failure(&mut self, id: ProductId, message: String) {
        self.acting.remove(&id);
        self.errors.insert(id, message);
    }

    /// Returns the card-local error for `id`.
    #[must_use]
    pub fn error(&self, id: ProductId) -> Option<&str> {
        self.errors.get(&id).map(String::as_str)
    }

    /// Returns the number of cards with a decision in flight.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.acting.len()
    }

    /// Forgets every card; used when the pending view is unmounted.
    pub fn clear(&mut self) {
        self.acting.clear();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{CardPhase, CardTracker};
    use crate::catalogue::models::{ProductId, ReviewAction};

    const CARD: ProductId = ProductId::new(1);

    #[rstest]
    fn cards_start_idle() {
        let tracker = CardTracker::new();

        assert_eq!(tracker.phase(CARD), CardPhase::Idle);
        assert!(tracker.phase(CARD).is_idle());
        assert_eq!(tracker.error(CARD), None);
    }

    #[rstest]
    #[case::approve(ReviewAction::Approve)]
    #[case::reject(ReviewAction::Reject)]
    fn second_action_on_acting_card_is_ignored(#[case] first: ReviewAction) {
        let mut tracker = CardTracker::new();

        assert!(tracker.try_begin(CARD, first));
        assert!(!tracker.try_begin(CARD, ReviewAction::Approve));
        assert!(!tracker.try_begin(CARD, ReviewAction::Reject));
        assert_eq!(tracker.phase(CARD), CardPhase::Acting(first));
    }

    #[rstest]
    fn failure_returns_card_to_idle_with_error() {
        let mut tracker = CardTracker::new();
        tracker.try_begin(CARD, ReviewAction::Reject);

        tracker.complete_failure(CARD, "status 500".to_owned());

        assert_eq!(tracker.phase(CARD), CardPhase::Idle);
        assert_eq!(tracker.error(CARD), Some("status 500"));
    }

    #[rstest]
    fn retry_clears_previous_error() {
        let mut tracker = CardTracker::new();
        tracker.try_begin(CARD, ReviewAction::Reject);
        tracker.complete_failure(CARD, "status 500".to_owned());

        assert!(tracker.try_begin(CARD, ReviewAction::Approve));

        assert_eq!(tracker.error(CARD), None);
        assert_eq!(tracker.in_flight(), 1);
    }

    #[rstest]
    fn cards_act_independently() {
        let mut tracker = CardTracker::new();
        let other = ProductId::new(2);

        assert!(tracker.try_begin(CARD, ReviewAction::Approve));
        assert!(tracker.try_begin(other, ReviewAction::Reject));
        tracker.complete_success(CARD);

        assert_eq!(tracker.phase(CARD), CardPhase::Idle);
        assert_eq!(tracker.phase(other), CardPhase::Acting(ReviewAction::Reject));
    }

    #[rstest]
    fn clear_forgets_everything() {
        let mut tracker = CardTracker::new();
        tracker.try_begin(CARD, ReviewAction::Approve);
        tracker.complete_failure(ProductId::new(3), "nope".to_owned());

        tracker.clear();

        assert_eq!(tracker.in_flight(), 0);
        assert_eq!(tracker.error(ProductId::new(3)), None);
    }
}
