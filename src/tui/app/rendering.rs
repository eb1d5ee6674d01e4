//! Rendering logic for the dashboard.
//!
//! These are pure query methods that read state without modification.

use super::DashboardApp;
use crate::tui::components::{
    ProductGridViewContext, bottom_nav, count_line, empty_state, error_state, loading_state,
};

impl DashboardApp {
    /// Renders the full dashboard frame before viewport normalisation.
    pub(super) fn render_dashboard(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_header());
        output.push_str(&count_line(self.list.len(), self.list.view()));
        output.push('\n');
        output.push_str(&self.render_body());
        output.push_str(&self.render_status_bar());
        output.push_str(&bottom_nav(self.list.view()));

        output
    }

    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "Curator - Product Review";
        let loading_indicator = if self.list.is_loading() {
            " [Loading...]"
        } else {
            ""
        };
        format!("{title}{loading_indicator}\n")
    }

    /// Renders the error, loading, empty, or grid body for the active view.
    fn render_body(&self) -> String {
        if let Some(message) = self.list.error() {
            return error_state(message);
        }
        if self.list.is_empty() {
            return if self.list.is_loading() {
                loading_state(self.list.view())
            } else {
                empty_state(self.list.view())
            };
        }

        let ctx = ProductGridViewContext {
            products: self.list.products(),
            cursor_position: self.cursor.position,
            scroll_offset: self.cursor.scroll_offset,
            show_actions: self.list.view().accepts_reviews(),
            cards: &self.cards,
            reasons: &self.reasons,
            max_width: usize::from(self.width).max(1),
        };
        self.grid.view(&ctx)
    }

    /// Renders the status bar with the draft prompt, notice, or help hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(draft) = &self.reason_draft {
            return format!(
                "Reason ({} left): {}_  Enter:keep  Esc:discard\n",
                draft.remaining_chars(),
                draft.text()
            );
        }

        if let Some(notice) = &self.notice {
            return format!("{notice}\n");
        }

        format!("{}\n", self.status_hints())
    }

    const fn status_hints(&self) -> &'static str {
        let narrow = self.width <= 80;
        match (self.list.view().accepts_reviews(), narrow) {
            (true, true) => "q:quit  ?:help  j/k:move  a:approve  x:reject  e:reason",
            (true, false) => {
                "j/k:move  a:approve  x:reject  e:reason  Tab:view  r:refresh  ?:help  q:quit"
            }
            (false, true) => "q:quit  ?:help  j/k:move  Tab:view",
            (false, false) => "j/k:move  Tab:view  r:refresh  ?:help  q:quit",
        }
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Navigation:
  j, Down    Move cursor down
  k, Up      Move cursor up
  Home, g    Go to first product
  End, G     Go to last product

Views:
  1          Approved products
  2          Pending products
  Tab        Switch view
  r          Reload current view

Review (Pending view):
  a          Approve selected product
  x          Reject selected product
  e          Edit reason for selected product

Reason editing:
  text keys  Edit reason text
  Backspace  Delete one character
  Enter      Keep reason
  Esc        Discard changes

Other:
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}
