//! Curator CLI entrypoint for the product review workflow.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use curator::{
    CatalogueError, CuratorConfig, HttpProductGateway, NoopTelemetrySink, OperationMode,
    StderrJsonlTelemetrySink, TelemetrySink, TracingTelemetrySink, logging,
};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CatalogueError> {
    let config = load_config()?;
    let mode = config.operation_mode()?;
    logging::init(&config.log_destination(&mode))?;

    let gateway = Arc::new(HttpProductGateway::new(
        config.api_base_url()?,
        config.request_timeout(),
    )?);
    let telemetry = telemetry_sink(&config, &mode);

    match mode {
        OperationMode::Dashboard => cli::dashboard::run(&config, gateway, telemetry).await,
        OperationMode::ListProducts(view) => {
            cli::listing::run(gateway.as_ref(), view, telemetry.as_ref()).await
        }
        OperationMode::SubmitReview(decision) => {
            cli::review_once::run(gateway.as_ref(), &decision, telemetry.as_ref()).await
        }
        OperationMode::Stats => cli::stats::run_stats(gateway.as_ref()).await,
        OperationMode::Health => cli::stats::run_health(gateway.as_ref()).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`CatalogueError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<CuratorConfig, CatalogueError> {
    CuratorConfig::load().map_err(|error| CatalogueError::Configuration {
        message: error.to_string(),
    })
}

/// Chooses the telemetry sink for `mode`.
///
/// The dashboard owns the terminal, so its events go through tracing (and
/// from there to the log file) instead of stderr.
fn telemetry_sink(config: &CuratorConfig, mode: &OperationMode) -> Arc<dyn TelemetrySink> {
    if !config.telemetry {
        return Arc::new(NoopTelemetrySink);
    }
    if mode.is_interactive() {
        Arc::new(TracingTelemetrySink)
    } else {
        Arc::new(StderrJsonlTelemetrySink)
    }
}
