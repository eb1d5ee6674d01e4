//! One-shot product listing.

use std::io::{self, Write};

use curator::{CatalogueError, ProductGateway, ReviewView, TelemetrySink, load_products};

use super::output::write_product_list;

/// Prints the products of `view` to stdout.
///
/// # Errors
///
/// Returns the gateway error when the list cannot be fetched and
/// [`CatalogueError::Io`] when stdout cannot be written.
pub async fn run(
    gateway: &dyn ProductGateway,
    view: ReviewView,
    telemetry: &dyn TelemetrySink,
) -> Result<(), CatalogueError> {
    let mut stdout = io::stdout().lock();
    run_with_writer(gateway, view, telemetry, &mut stdout).await
}

/// Prints the products of `view` to `writer`.
pub async fn run_with_writer<W: Write>(
    gateway: &dyn ProductGateway,
    view: ReviewView,
    telemetry: &dyn TelemetrySink,
    writer: &mut W,
) -> Result<(), CatalogueError> {
    let products = load_products(gateway, view, telemetry).await?;
    write_product_list(writer, view, &products)
}
