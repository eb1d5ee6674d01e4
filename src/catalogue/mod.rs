//! Catalogue API access: product models, the API base address, and the
//! gateway used to list products and submit review decisions.
//!
//! Errors are mapped into [`CatalogueError`] variants so callers can surface
//! precise failures without exposing reqwest internals.

pub mod base_url;
pub mod error;
pub mod gateway;
pub mod models;

pub use base_url::{ApiBaseUrl, DEFAULT_API_BASE_URL};
pub use error::CatalogueError;
pub use gateway::{HttpProductGateway, ProductGateway};
pub use models::{
    CatalogueStats, HealthStatus, Product, ProductCategory, ProductId, ReviewAction,
    ReviewDecision, ReviewReceipt, ReviewStatus, ReviewView,
};

#[cfg(test)]
pub use gateway::MockProductGateway;
