//! Display-width aware truncation for card text.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Truncates `text` to `max_width` terminal columns, appending `...` when
/// anything was cut. Only the first line of `text` is kept.
pub(crate) fn truncate_line(text: &str, max_width: usize) -> String {
    let first_line = text.lines().next().unwrap_or("").trim();
    if first_line.width() <= max_width && !text.trim().contains('\n') {
        return first_line.to_owned();
    }
    if max_width <= ELLIPSIS.len() {
        return ".".repeat(max_width);
    }

    let target_width = max_width - ELLIPSIS.len();
    let mut truncated = String::new();
    let mut current_width = 0_usize;
    for character in first_line.chars() {
        let char_width = UnicodeWidthChar::width(character).unwrap_or(0);
        if current_width.saturating_add(char_width) > target_width {
            break;
        }
        truncated.push(character);
        current_width = current_width.saturating_add(char_width);
    }
    truncated.push_str(ELLIPSIS);
    truncated
}
