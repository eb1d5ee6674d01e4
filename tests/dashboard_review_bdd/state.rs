//! Scenario state for dashboard review BDD tests.

use std::any::Any;
use std::error::Error;
use std::sync::Arc;

use bubbletea_rs::Cmd;
use curator::catalogue::gateway::test_support::ScriptedGateway;
use curator::catalogue::models::test_support::{approved_product, pending_product};
use curator::tui::messages::AppMsg;
use curator::tui::{DashboardApp, DashboardContext};
use curator::{NoopTelemetrySink, ProductGateway, ProductId, ReviewView};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// State shared across steps in a dashboard review scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct DashboardState {
    /// Scripted catalogue API.
    pub(crate) gateway: Slot<Arc<ScriptedGateway>>,
    /// The dashboard model under test.
    pub(crate) app: Slot<DashboardApp>,
    /// Command issued but not yet executed.
    pub(crate) pending_cmd: Slot<Option<Cmd>>,
}

/// Builds a gateway listing `ids` as pending and one approved product.
pub(crate) fn catalogue_with_pending(ids: &[ProductId]) -> ScriptedGateway {
    let pending = ids
        .iter()
        .map(|id| pending_product(id.get(), &format!("Product {id}")))
        .collect();
    ScriptedGateway::new()
        .with_products(ReviewView::Pending, pending)
        .with_products(ReviewView::Approved, vec![approved_product(10, "Zeta")])
}

/// Creates a dashboard backed by `gateway`, opening on `view`.
pub(crate) fn dashboard(gateway: &Arc<ScriptedGateway>, view: ReviewView) -> DashboardApp {
    let shared: Arc<dyn ProductGateway> = Arc::<ScriptedGateway>::clone(gateway);
    let context =
        DashboardContext::new(shared, Arc::new(NoopTelemetrySink)).with_initial_view(view);
    DashboardApp::new(context)
}

/// Parses a comma-separated list of product IDs (`1, 2`).
pub(crate) fn parse_ids(text: &str) -> Result<Vec<ProductId>, Box<dyn Error>> {
    text.trim_matches('"')
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<u64>()
                .map(ProductId::new)
                .map_err(|error| format!("invalid product id {part:?}: {error}").into())
        })
        .collect()
}

/// Executes `cmd` and feeds every resulting message back into `app`.
pub(crate) fn drive(app: &mut DashboardApp, cmd: Option<Cmd>) -> Result<(), Box<dyn Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    let mut pending = cmd;
    while let Some(next) = pending.take() {
        let Some(message) = runtime.block_on(next) else {
            break;
        };
        let app_msg = <Box<dyn Any + Send>>::downcast::<AppMsg>(message)
            .map_err(|_| "command returned a non-AppMsg value")?;
        pending = app.handle_message(&app_msg);
    }
    Ok(())
}
