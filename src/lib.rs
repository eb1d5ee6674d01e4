//! Curator library crate providing the product review workflow.
//!
//! The library talks to the catalogue API through a [`ProductGateway`],
//! keeps per-view product lists and per-card review state, and renders an
//! interactive dashboard with bubbletea-rs. Errors surface as
//! [`CatalogueError`] values that the CLI can display directly.

pub mod catalogue;
pub mod config;
pub mod logging;
pub mod review;
pub mod telemetry;
pub mod tui;

pub use catalogue::{
    ApiBaseUrl, CatalogueError, CatalogueStats, HealthStatus, HttpProductGateway, Product,
    ProductCategory, ProductGateway, ProductId, ReviewAction, ReviewDecision, ReviewReceipt,
    ReviewStatus, ReviewView,
};
pub use config::{CuratorConfig, OperationMode};
pub use logging::LogDestination;
pub use review::{ReviewOutcome, dispatch_review, load_products};
pub use telemetry::{
    NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink,
    TracingTelemetrySink,
};
