//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use curator::{
    CatalogueError, CatalogueStats, HealthStatus, Product, ReviewOutcome, ReviewView,
};

/// Writes the products of `view` to the given writer, one block per product.
pub fn write_product_list<W: Write>(
    writer: &mut W,
    view: ReviewView,
    products: &[Product],
) -> Result<(), CatalogueError> {
    writeln!(writer, "{} {} Products", products.len(), view.label()).map_err(|e| io_error(&e))?;

    if products.is_empty() {
        return Ok(());
    }
    writeln!(writer).map_err(|e| io_error(&e))?;

    for product in products {
        writeln!(
            writer,
            "  #{} [{}] {} ({})",
            product.id,
            product.status,
            product.name,
            product.category.label()
        )
        .map_err(|e| io_error(&e))?;
        if let Some(website) = product.website.as_deref().filter(|url| !url.is_empty()) {
            writeln!(writer, "      {website}").map_err(|e| io_error(&e))?;
        }
    }

    Ok(())
}

/// Writes the outcome of a single review decision.
pub fn write_review_outcome<W: Write>(
    writer: &mut W,
    outcome: &ReviewOutcome,
) -> Result<(), CatalogueError> {
    writeln!(writer, "Product {} {}", outcome.product_id, outcome.status)
        .map_err(|e| io_error(&e))?;

    if let Some(message) = outcome
        .receipt
        .as_ref()
        .and_then(|receipt| receipt.message.as_deref())
    {
        writeln!(writer, "API: {message}").map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes processing and review statistics.
pub fn write_stats<W: Write>(writer: &mut W, stats: &CatalogueStats) -> Result<(), CatalogueError> {
    let raw = &stats.raw_products;
    let clean = &stats.clean_products;
    let message = format!(
        "Raw products: {} total ({} pending, {} processing, {} completed, {} failed)\n\
         Clean products: {} total ({} pending review, {} approved, {} rejected)",
        raw.total,
        raw.pending,
        raw.processing,
        raw.completed,
        raw.failed,
        clean.total,
        clean.pending_review,
        clean.approved,
        clean.rejected
    );

    writeln!(writer, "{message}").map_err(|e| io_error(&e))
}

/// Writes the API health report.
pub fn write_health<W: Write>(writer: &mut W, health: &HealthStatus) -> Result<(), CatalogueError> {
    let status = if health.status.is_empty() {
        "unknown"
    } else {
        health.status.as_str()
    };
    let database = health.database.as_deref().unwrap_or("not reported");

    writeln!(writer, "Status: {status}\nDatabase: {database}").map_err(|e| io_error(&e))
}

/// Converts an I/O error to a [`CatalogueError::Io`].
pub(crate) fn io_error(error: &io::Error) -> CatalogueError {
    CatalogueError::Io {
        message: error.to_string(),
    }
}
