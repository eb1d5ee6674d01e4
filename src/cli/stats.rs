//! Statistics and health report modes.

use std::io::{self, Write};

use curator::{CatalogueError, ProductGateway};

use super::output::{write_health, write_stats};

/// Prints processing and review statistics to stdout.
///
/// # Errors
///
/// Returns the gateway error when the statistics cannot be fetched and
/// [`CatalogueError::Io`] when stdout cannot be written.
pub async fn run_stats(gateway: &dyn ProductGateway) -> Result<(), CatalogueError> {
    let mut stdout = io::stdout().lock();
    run_stats_with_writer(gateway, &mut stdout).await
}

/// Prints processing and review statistics to `writer`.
pub async fn run_stats_with_writer<W: Write>(
    gateway: &dyn ProductGateway,
    writer: &mut W,
) -> Result<(), CatalogueError> {
    let stats = gateway.stats().await?;
    write_stats(writer, &stats)
}

/// Prints the API health report to stdout.
///
/// # Errors
///
/// Returns the gateway error when the API cannot be reached and
/// [`CatalogueError::Io`] when stdout cannot be written.
pub async fn run_health(gateway: &dyn ProductGateway) -> Result<(), CatalogueError> {
    let mut stdout = io::stdout().lock();
    run_health_with_writer(gateway, &mut stdout).await
}

/// Prints the API health report to `writer`.
pub async fn run_health_with_writer<W: Write>(
    gateway: &dyn ProductGateway,
    writer: &mut W,
) -> Result<(), CatalogueError> {
    let health = gateway.health().await?;
    if !health.is_healthy() {
        tracing::warn!(status = %health.status, "catalogue API reports degraded health");
    }
    write_health(writer, &health)
}
