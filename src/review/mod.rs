//! Review workflow core shared by the dashboard and the one-shot CLI modes.
//!
//! - [`list`] holds the loaded products for one view and applies fetch
//!   results and confirmed review outcomes.
//! - [`card`] tracks which cards have a decision in flight.
//! - [`workflow`] performs the gateway calls and records telemetry.

pub mod card;
pub mod list;
pub mod workflow;

pub use card::{CardPhase, CardTracker};
pub use list::{LoadOutcome, LoadTicket, ProductListState};
pub use workflow::{ReviewOutcome, dispatch_review, load_products};
