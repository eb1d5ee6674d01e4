//! Scripted in-memory gateway for workflow and dashboard tests.
//!
//! Unlike the mockall mock, the scripted gateway can be shared across
//! threads behind an `Arc` and reused for many calls, which suits tests that
//! drive the dashboard through several fetches and review commands.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::ProductGateway;
use crate::catalogue::error::CatalogueError;
use crate::catalogue::models::{
    CatalogueStats, HealthStatus, Product, ProductId, ReviewDecision, ReviewReceipt, ReviewView,
};

#[derive(Debug, Default)]
struct Script {
    lists: HashMap<ReviewView, Result<Vec<Product>, CatalogueError>>,
    review_failures: HashMap<ProductId, CatalogueError>,
    submitted: Vec<ReviewDecision>,
    list_calls: Vec<ReviewView>,
}

/// Gateway returning pre-programmed responses.
///
/// Views without a scripted list return an empty collection. Reviews succeed
/// unless a failure was scripted for the product.
#[derive(Debug, Default)]
pub struct ScriptedGateway {
    script: Mutex<Script>,
}

impl ScriptedGateway {
    /// Creates a gateway with no scripted responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the products returned for `view`.
    #[must_use]
    pub fn with_products(self, view: ReviewView, products: Vec<Product>) -> Self {
        self.set_products(view, products);
        self
    }

    /// Scripts a list failure for `view`.
    #[must_use]
    pub fn with_list_failure(self, view: ReviewView, error: CatalogueError) -> Self {
        self.with_script(|script| {
            script.lists.insert(view, Err(error));
        });
        self
    }

    /// Scripts a review failure for `product_id`.
    #[must_use]
    pub fn with_review_failure(self, product_id: ProductId, error: CatalogueError) -> Self {
        self.fail_reviews_of(product_id, error);
        self
    }

    /// Replaces the products returned for `view`.
    pub fn set_products(&self, view: ReviewView, products: Vec<Product>) {
        self.with_script(|script| {
            script.lists.insert(view, Ok(products));
        });
    }

    /// Makes every later review of `product_id` fail with `error`.
    pub fn fail_reviews_of(&self, product_id: ProductId, error: CatalogueError) {
        self.with_script(|script| {
            script.review_failures.insert(product_id, error);
        });
    }

    /// Returns every decision submitted so far.
    #[must_use]
    pub fn submitted(&self) -> Vec<ReviewDecision> {
        self.with_script(|script| script.submitted.clone())
    }

    /// Returns the views requested so far, in call order.
    #[must_use]
    pub fn list_calls(&self) -> Vec<ReviewView> {
        self.with_script(|script| script.list_calls.clone())
    }

    fn with_script<R>(&self, f: impl FnOnce(&mut Script) -> R) -> R {
        let mut guard = self.script.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

#[async_trait]
impl ProductGateway for ScriptedGateway {
    async fn list_products(&self, view: ReviewView) -> Result<Vec<Product>, CatalogueError> {
        self.with_script(|script| {
            script.list_calls.push(view);
            script.lists.get(&view).cloned().unwrap_or_else(|| Ok(Vec::new()))
        })
    }

    async fn submit_review(
        &self,
        decision: &ReviewDecision,
    ) -> Result<Option<ReviewReceipt>, CatalogueError> {
        self.with_script(|script| {
            script.submitted.push(decision.clone());
            script
                .review_failures
                .get(&decision.product_id())
                .cloned()
                .map_or_else(
                    || {
                        Ok(Some(ReviewReceipt {
                            message: Some(format!("Product {}", decision.action())),
                            product_id: Some(decision.product_id()),
                        }))
                    },
                    Err,
                )
        })
    }

    async fn stats(&self) -> Result<CatalogueStats, CatalogueError> {
        Ok(CatalogueStats::default())
    }

    async fn health(&self) -> Result<HealthStatus, CatalogueError> {
        Ok(HealthStatus {
            status: "healthy".to_owned(),
            database: Some("connected".to_owned()),
        })
    }
}
