//! Test utilities for dashboard rendering tests.

/// Strips ANSI escape codes from a string.
///
/// Used in tests to verify text content without interference from badge
/// colours and cursor highlighting.
///
/// # Example
///
/// ```
/// use curator::tui::components::test_utils::strip_ansi_codes;
///
/// let coloured = "\x1b[34m(devtools)\x1b[39m";
/// assert_eq!(strip_ansi_codes(coloured), "(devtools)");
/// ```
#[must_use]
pub fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_escape = false;

    for ch in s.chars() {
        if ch == '\x1b' {
            in_escape = true;
        } else if in_escape {
            // An alphabetic character terminates the escape sequence.
            in_escape = !ch.is_ascii_alphabetic();
        } else {
            result.push(ch);
        }
    }

    result
}
