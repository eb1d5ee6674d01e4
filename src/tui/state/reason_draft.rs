//! Editable review reason tied to one product card.
//!
//! The draft enforces a maximum character count. Keeping the draft stores it
//! as the reason sent with the next decision for that card.

use thiserror::Error;

use crate::catalogue::ProductId;

/// Local reason draft for a selected product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasonDraftState {
    product_id: ProductId,
    text: String,
    max_length: usize,
}

impl ReasonDraftState {
    /// Creates an empty draft for the given product.
    #[must_use]
    pub fn new(product_id: ProductId, max_length: usize) -> Self {
        debug_assert!(
            max_length >= 1,
            "reason draft max_length must be normalised before state creation"
        );
        Self {
            product_id,
            text: String::new(),
            max_length,
        }
    }

    /// Creates a draft pre-filled with `text`, truncated to the limit.
    #[must_use]
    pub fn with_text(product_id: ProductId, max_length: usize, text: &str) -> Self {
        Self {
            product_id,
            text: text.chars().take(max_length).collect(),
            max_length,
        }
    }

    /// Returns the product the draft belongs to.
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Returns the current draft text.
    #[must_use]
    pub const fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Returns the configured maximum character count.
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// Returns the current character count using Unicode scalar values.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns remaining characters before the draft reaches its limit.
    #[must_use]
    pub fn remaining_chars(&self) -> usize {
        self.max_length.saturating_sub(self.char_count())
    }

    /// Appends one character, enforcing the maximum length.
    ///
    /// # Errors
    ///
    /// Returns [`ReasonDraftError::LengthExceeded`] when appending `character`
    /// would exceed the configured maximum length.
    pub fn push_char(&mut self, character: char) -> Result<(), ReasonDraftError> {
        let attempted = self.char_count().saturating_add(1);
        if attempted > self.max_length {
            return Err(ReasonDraftError::LengthExceeded {
                attempted,
                max_length: self.max_length,
            });
        }

        self.text.push(character);
        Ok(())
    }

    /// Removes the last character, if present.
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Returns the text as typed, or `None` when only whitespace remains.
    #[must_use]
    pub fn finished_reason(&self) -> Option<String> {
        (!self.text.trim().is_empty()).then(|| self.text.clone())
    }
}

/// Errors raised while editing reason drafts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReasonDraftError {
    /// The draft would exceed the configured character limit.
    #[error("reason length {attempted} exceeds configured limit {max_length}")]
    LengthExceeded {
        /// Character count after the attempted edit.
        attempted: usize,
        /// Configured maximum character count.
        max_length: usize,
    },
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{ReasonDraftError, ReasonDraftState};
    use crate::catalogue::ProductId;

    #[rstest]
    fn push_char_enforces_limit() {
        let mut draft = ReasonDraftState::new(ProductId::new(1), 2);
        draft.push_char('o').expect("first char fits");
        draft.push_char('k').expect("second char fits");

        let result = draft.push_char('!');

        assert_eq!(
            result,
            Err(ReasonDraftError::LengthExceeded {
                attempted: 3,
                max_length: 2,
            })
        );
        assert_eq!(draft.text(), "ok");
        assert_eq!(draft.remaining_chars(), 0);
    }

    #[rstest]
    fn multibyte_characters_count_once() {
        let mut draft = ReasonDraftState::new(ProductId::new(1), 3);
        for character in ['é', '漢', '🙂'] {
            draft.push_char(character).expect("within limit");
        }

        assert_eq!(draft.char_count(), 3);
        draft.backspace();
        assert_eq!(draft.text(), "é漢");
    }

    #[rstest]
    #[case::blank("   ", None)]
    #[case::padded("  spam  ", Some("  spam  "))]
    #[case::interior("too  many   spaces", Some("too  many   spaces"))]
    fn finished_reason_keeps_typed_text(#[case] text: &str, #[case] expected: Option<&str>) {
        let draft = ReasonDraftState::with_text(ProductId::new(1), 50, text);

        assert_eq!(draft.finished_reason().as_deref(), expected);
    }

    #[rstest]
    fn with_text_truncates_to_limit() {
        let draft = ReasonDraftState::with_text(ProductId::new(9), 4, "duplicate");

        assert_eq!(draft.text(), "dupl");
        assert_eq!(draft.product_id(), ProductId::new(9));
    }
}
