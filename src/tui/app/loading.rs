//! View activation and product list loading.
//!
//! Activating a view mounts a fresh list and issues a fetch. Responses carry
//! the ticket they were issued with; anything but the latest ticket of the
//! current mount is dropped.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::DashboardApp;
use crate::catalogue::{Product, ReviewView};
use crate::review::{LoadOutcome, LoadTicket, ProductListState, load_products};
use crate::tui::messages::AppMsg;
use crate::tui::state::CursorState;

impl DashboardApp {
    /// Starts a fetch for the active view and returns the command performing it.
    ///
    /// Any fetch still in flight becomes stale.
    pub fn start(&mut self) -> Cmd {
        let ticket = self.list.begin_load();
        self.load_cmd(ticket)
    }

    fn load_cmd(&self, ticket: LoadTicket) -> Cmd {
        let gateway = self.context.gateway();
        let telemetry = self.context.telemetry();
        Box::pin(async move {
            let msg =
                match load_products(gateway.as_ref(), ticket.view(), telemetry.as_ref()).await {
                    Ok(products) => AppMsg::ProductsLoaded { ticket, products },
                    Err(error) => AppMsg::ProductsFailed {
                        ticket,
                        message: error.to_string(),
                    },
                };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        })
    }

    /// Dispatches view switching messages.
    pub(super) fn handle_view_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SwitchView(view) => self.activate_view(*view),
            AppMsg::ToggleView => self.activate_view(self.list.view().toggled()),
            _ => None,
        }
    }

    /// Mounts `view` and loads it. Re-selecting the active view does nothing.
    fn activate_view(&mut self, view: ReviewView) -> Option<Cmd> {
        if view == self.list.view() {
            return None;
        }

        self.last_mount = self.last_mount.saturating_add(1);
        self.list = ProductListState::new(view, self.last_mount);
        self.cards.clear();
        self.reasons.clear();
        self.reason_draft = None;
        self.notice = None;
        self.cursor = CursorState::new();
        self.selected_id = None;
        tracing::debug!(view = %view, mount = self.last_mount, "activated view");

        Some(self.start())
    }

    /// Dispatches data loading messages to their handlers.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::LoadRequested => {
                self.notice = None;
                Some(self.start())
            }
            AppMsg::ProductsLoaded { ticket, products } => {
                self.handle_products_loaded(*ticket, products);
                None
            }
            AppMsg::ProductsFailed { ticket, message } => {
                self.handle_products_failed(*ticket, message);
                None
            }
            _ => None,
        }
    }

    /// Applies a fetched list, keeping the selection on the same product
    /// when it is still present.
    fn handle_products_loaded(&mut self, ticket: LoadTicket, products: &[Product]) {
        let selected_id = self.selected_id;
        if self.list.apply_loaded(ticket, products.to_vec()) == LoadOutcome::Stale {
            tracing::debug!(
                view = %ticket.view(),
                generation = ticket.generation(),
                "ignoring stale product list"
            );
            return;
        }

        if let Some(index) = selected_id.and_then(|id| self.list.position_of(id)) {
            self.cursor.position = index;
        }
        self.clamp_cursor_and_update_selection();
    }

    fn handle_products_failed(&mut self, ticket: LoadTicket, message: &str) {
        if self.list.apply_failed(ticket, message.to_owned()) == LoadOutcome::Stale {
            tracing::debug!(
                view = %ticket.view(),
                generation = ticket.generation(),
                "ignoring stale list failure"
            );
        }
    }
}
