//! Gateways for talking to the catalogue API.
//!
//! The [`ProductGateway`] trait is the seam between the review workflow and
//! the network. [`HttpProductGateway`] performs real requests with reqwest;
//! tests substitute a mock or the scripted gateway from `test_support`.

mod error_mapping;
mod http_gateway;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use http_gateway::HttpProductGateway;

use async_trait::async_trait;

use crate::catalogue::error::CatalogueError;
use crate::catalogue::models::{
    CatalogueStats, HealthStatus, Product, ReviewDecision, ReviewReceipt, ReviewView,
};

/// Gateway that can list products and submit review decisions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// Fetch every product currently shown in `view`, in API order.
    async fn list_products(&self, view: ReviewView) -> Result<Vec<Product>, CatalogueError>;

    /// Submit one approve/reject decision.
    ///
    /// Returns the parsed acknowledgement when the API sends one.
    async fn submit_review(
        &self,
        decision: &ReviewDecision,
    ) -> Result<Option<ReviewReceipt>, CatalogueError>;

    /// Fetch processing and review statistics.
    async fn stats(&self) -> Result<CatalogueStats, CatalogueError>;

    /// Fetch the service health report.
    async fn health(&self) -> Result<HealthStatus, CatalogueError>;
}
