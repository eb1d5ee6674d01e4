//! Cursor and scroll position over the product grid.

/// Cursor position and scroll offset, both in cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorState {
    /// Index of the selected card.
    pub position: usize,
    /// Index of the first visible card.
    pub scroll_offset: usize,
}

impl CursorState {
    /// Creates a cursor at the first card.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            position: 0,
            scroll_offset: 0,
        }
    }

    /// Clamps the cursor to a list of `count` cards.
    pub const fn clamp(&mut self, count: usize) {
        if count == 0 {
            self.position = 0;
            self.scroll_offset = 0;
        } else if self.position >= count {
            self.position = count - 1;
        }
    }

    /// Moves the cursor by `step` cards towards the start.
    pub const fn move_up(&mut self, step: usize) {
        self.position = self.position.saturating_sub(step);
    }

    /// Moves the cursor by `step` cards towards the end of `count` cards.
    pub fn move_down(&mut self, step: usize, count: usize) {
        let last = count.saturating_sub(1);
        self.position = self.position.saturating_add(step).min(last);
    }

    /// Adjusts the scroll offset so the cursor stays within `visible` cards.
    pub const fn ensure_visible(&mut self, visible: usize) {
        if self.position < self.scroll_offset {
            self.scroll_offset = self.position;
            return;
        }

        let viewport_end = self.scroll_offset.saturating_add(visible);
        if self.position >= viewport_end {
            self.scroll_offset = self.position.saturating_sub(visible.saturating_sub(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::CursorState;

    #[rstest]
    #[case::empty_list(5, 0, 0)]
    #[case::past_end(5, 3, 2)]
    #[case::within_bounds(1, 3, 1)]
    fn clamp_keeps_cursor_in_bounds(
        #[case] position: usize,
        #[case] count: usize,
        #[case] expected: usize,
    ) {
        let mut cursor = CursorState {
            position,
            scroll_offset: 0,
        };

        cursor.clamp(count);

        assert_eq!(cursor.position, expected);
    }

    #[rstest]
    fn move_down_stops_at_last_card() {
        let mut cursor = CursorState::new();

        cursor.move_down(10, 3);

        assert_eq!(cursor.position, 2);
    }

    #[rstest]
    fn ensure_visible_scrolls_both_ways() {
        let mut cursor = CursorState::new();
        cursor.move_down(5, 10);
        cursor.ensure_visible(3);
        assert_eq!(cursor.scroll_offset, 3);

        cursor.move_up(5);
        cursor.ensure_visible(3);
        assert_eq!(cursor.scroll_offset, 0);
    }
}
