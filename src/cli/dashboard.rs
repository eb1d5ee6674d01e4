//! Dashboard mode for reviewing products interactively.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use curator::tui::{DashboardApp, DashboardContext, set_dashboard_context};
use curator::{CatalogueError, CuratorConfig, ProductGateway, TelemetrySink};

/// Runs the interactive dashboard until the operator quits.
///
/// # Errors
///
/// Returns [`CatalogueError::InvalidArgument`] for an unknown initial view and
/// [`CatalogueError::Io`] when the terminal program fails.
pub async fn run(
    config: &CuratorConfig,
    gateway: Arc<dyn ProductGateway>,
    telemetry: Arc<dyn TelemetrySink>,
) -> Result<(), CatalogueError> {
    let context = DashboardContext::new(gateway, telemetry)
        .with_initial_view(config.initial_view()?)
        .with_reason_max_length(config.reason_max_length());

    // DashboardApp::init() reads the context back; a second install in the
    // same process keeps the first one.
    if !set_dashboard_context(context) {
        tracing::debug!("dashboard context already installed");
    }

    run_tui().await.map_err(|error| CatalogueError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Runs the bubbletea-rs program with the `DashboardApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<DashboardApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
