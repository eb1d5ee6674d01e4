//! One-shot review decision.

use std::io::{self, Write};

use curator::{CatalogueError, ProductGateway, ReviewDecision, TelemetrySink, dispatch_review};

use super::output::write_review_outcome;

/// Submits `decision` and prints the outcome to stdout.
///
/// # Errors
///
/// Returns the gateway error when the API refuses the decision or cannot be
/// reached, and [`CatalogueError::Io`] when stdout cannot be written.
pub async fn run(
    gateway: &dyn ProductGateway,
    decision: &ReviewDecision,
    telemetry: &dyn TelemetrySink,
) -> Result<(), CatalogueError> {
    let mut stdout = io::stdout().lock();
    run_with_writer(gateway, decision, telemetry, &mut stdout).await
}

/// Submits `decision` and prints the outcome to `writer`.
pub async fn run_with_writer<W: Write>(
    gateway: &dyn ProductGateway,
    decision: &ReviewDecision,
    telemetry: &dyn TelemetrySink,
    writer: &mut W,
) -> Result<(), CatalogueError> {
    let outcome = dispatch_review(gateway, decision, telemetry).await?;
    write_review_outcome(writer, &outcome)
}
