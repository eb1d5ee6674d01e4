//! Cursor movement over the product grid.
//!
//! Every movement goes through `set_cursor`, which keeps the selected
//! product ID and the scroll window in step with the cursor.

use bubbletea_rs::Cmd;

use super::DashboardApp;
use crate::tui::messages::AppMsg;

impl DashboardApp {
    /// Dispatches cursor movement messages.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let count = self.list.len();
        if count == 0 {
            return None;
        }

        let mut cursor = self.cursor;
        match msg {
            AppMsg::CursorUp => cursor.move_up(1),
            AppMsg::CursorDown => cursor.move_down(1, count),
            AppMsg::Home => cursor.position = 0,
            AppMsg::End => cursor.position = count - 1,
            _ => return None,
        }
        self.set_cursor(cursor.position);
        None
    }
}
