//! `Model` trait implementation for the dashboard.
//!
//! Covers initialisation from the installed [`DashboardContext`], update
//! dispatch, and view rendering.
//!
//! [`DashboardContext`]: crate::tui::DashboardContext

use std::any::Any;

use bubbletea_rs::event::{KeyMsg, WindowSizeMsg};
use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::DashboardApp;
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;

impl Model for DashboardApp {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Self::new(crate::tui::dashboard_context());
        let cmd = model.start();
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            return map_key_to_message(key_msg, self.input_context())
                .and_then(|mapped| self.handle_message(&mapped));
        }

        if let Some(size_msg) = msg.downcast_ref::<WindowSizeMsg>() {
            return self.handle_message(&AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            });
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }
        self.normalise_viewport(&self.render_dashboard())
    }
}

impl DashboardApp {
    /// Fits the frame to the terminal.
    ///
    /// Rows are clipped one column short of the width to avoid autowrap and
    /// padded with spaces so shorter rows overwrite stale cells.
    fn normalise_viewport(&self, output: &str) -> String {
        let safe_width = usize::from(self.width.max(1)).saturating_sub(1).max(1);
        let height = usize::from(self.height.max(1));

        let mut lines: Vec<String> = output
            .lines()
            .take(height)
            .map(|line| fit_line(line, safe_width))
            .collect();
        let blank = " ".repeat(safe_width);
        lines.resize(height, blank);

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

/// Clips `line` to `width` visible columns and pads the remainder.
///
/// ANSI escape sequences pass through without counting towards the width;
/// a reset is appended when clipping could leave a style open.
fn fit_line(line: &str, width: usize) -> String {
    let mut output = String::with_capacity(line.len());
    let mut visible = 0_usize;
    let mut in_escape = false;
    let mut styled = false;
    let mut reset_last = false;

    for ch in line.chars() {
        if in_escape {
            output.push(ch);
            reset_last = ch == 'm' && output.ends_with("\x1b[0m");
            in_escape = !ch.is_ascii_alphabetic();
            continue;
        }
        if ch == '\x1b' {
            output.push(ch);
            in_escape = true;
            styled = true;
            continue;
        }

        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        visible = visible.saturating_add(char_width);
        if char_width > 0 {
            reset_last = false;
        }
    }

    output.push_str(&" ".repeat(width.saturating_sub(visible)));
    if styled && !reset_last {
        output.push_str("\x1b[0m");
    }
    output
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::fit_line;

    #[rstest]
    #[case::pads_short("ab", 4, "ab  ")]
    #[case::clips_long("abcdef", 3, "abc")]
    #[case::wide_glyph_does_not_split("a\u{4e16}b", 2, "a ")]
    fn fit_line_plain(#[case] line: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(fit_line(line, width), expected);
    }

    #[rstest]
    fn fit_line_keeps_escapes_and_closes_style() {
        let fitted = fit_line("\x1b[31mred text\x1b[0m", 3);

        assert_eq!(fitted, "\x1b[31mred\x1b[0m");
    }
}
