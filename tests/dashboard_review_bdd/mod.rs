//! Support code for dashboard review BDD tests.

pub(crate) mod state;

pub(crate) use state::DashboardState;
