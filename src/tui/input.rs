//! Input handling for the dashboard.
//!
//! Keys map to different messages while a reason draft is open, so mapping
//! takes the current [`InputContext`].

use crossterm::event::{KeyCode, KeyModifiers};

use crate::catalogue::{ReviewAction, ReviewView};

use super::messages::AppMsg;

/// What the keyboard is currently driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Moving around the product grid.
    Browsing,
    /// Typing a review reason.
    DraftingReason,
}

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    match context {
        InputContext::Browsing => map_browsing_key(key.key),
        InputContext::DraftingReason => map_drafting_key(key),
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_browsing_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Tab | KeyCode::BackTab => Some(AppMsg::ToggleView),
        KeyCode::Char('1') => Some(AppMsg::SwitchView(ReviewView::Approved)),
        KeyCode::Char('2') => Some(AppMsg::SwitchView(ReviewView::Pending)),
        KeyCode::Char('r') => Some(AppMsg::LoadRequested),
        KeyCode::Char('a') => Some(AppMsg::ReviewRequested(ReviewAction::Approve)),
        KeyCode::Char('x') => Some(AppMsg::ReviewRequested(ReviewAction::Reject)),
        KeyCode::Char('e') => Some(AppMsg::StartReasonDraft),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

fn map_drafting_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.key {
        KeyCode::Char(character) => Some(AppMsg::ReasonDraftInsertChar(character)),
        KeyCode::Backspace => Some(AppMsg::ReasonDraftBackspace),
        KeyCode::Enter => Some(AppMsg::ReasonDraftKeep),
        KeyCode::Esc => Some(AppMsg::ReasonDraftCancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use rstest::rstest;

    use super::{InputContext, map_key_to_message};
    use crate::catalogue::{ReviewAction, ReviewView};
    use crate::tui::messages::AppMsg;

    fn key(code: KeyCode) -> bubbletea_rs::event::KeyMsg {
        bubbletea_rs::event::KeyMsg {
            key: code,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[rstest]
    #[case::approve(KeyCode::Char('a'), ReviewAction::Approve)]
    #[case::reject(KeyCode::Char('x'), ReviewAction::Reject)]
    fn review_keys_map_to_actions(#[case] code: KeyCode, #[case] expected: ReviewAction) {
        let msg = map_key_to_message(&key(code), InputContext::Browsing);

        assert!(
            matches!(msg, Some(AppMsg::ReviewRequested(action)) if action == expected),
            "unexpected message: {msg:?}"
        );
    }

    #[rstest]
    #[case::approved(KeyCode::Char('1'), ReviewView::Approved)]
    #[case::pending(KeyCode::Char('2'), ReviewView::Pending)]
    fn number_keys_select_tabs(#[case] code: KeyCode, #[case] expected: ReviewView) {
        let msg = map_key_to_message(&key(code), InputContext::Browsing);

        assert!(
            matches!(msg, Some(AppMsg::SwitchView(view)) if view == expected),
            "unexpected message: {msg:?}"
        );
    }

    #[rstest]
    fn text_keys_edit_draft_instead_of_acting() {
        let msg = map_key_to_message(&key(KeyCode::Char('a')), InputContext::DraftingReason);

        assert!(matches!(msg, Some(AppMsg::ReasonDraftInsertChar('a'))));
    }

    #[rstest]
    #[case::enter(KeyCode::Enter)]
    #[case::escape(KeyCode::Esc)]
    #[case::backspace(KeyCode::Backspace)]
    fn draft_control_keys_are_mapped(#[case] code: KeyCode) {
        let msg = map_key_to_message(&key(code), InputContext::DraftingReason);

        assert!(msg.is_some_and(|mapped| mapped.is_reason_draft()));
    }

    #[rstest]
    fn control_chords_are_ignored_while_drafting() {
        let chord = bubbletea_rs::event::KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        };

        assert!(map_key_to_message(&chord, InputContext::DraftingReason).is_none());
    }

    #[rstest]
    fn unknown_keys_are_ignored() {
        assert!(map_key_to_message(&key(KeyCode::F(5)), InputContext::Browsing).is_none());
    }
}
