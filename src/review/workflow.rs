//! Gateway calls for the review workflow.
//!
//! Both operations time the request, record a [`TelemetryEvent`], and log
//! the result. Neither retries.

use std::time::Instant;

use crate::catalogue::error::CatalogueError;
use crate::catalogue::gateway::ProductGateway;
use crate::catalogue::models::{
    Product, ProductId, ReviewDecision, ReviewReceipt, ReviewStatus, ReviewView,
};
use crate::telemetry::{TelemetryEvent, TelemetrySink};

/// Confirmed result of a review decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewOutcome {
    /// Reviewed product.
    pub product_id: ProductId,
    /// Status the product now carries (`approved` or `rejected`).
    pub status: ReviewStatus,
    /// Acknowledgement body, when the API sent a recognisable one.
    pub receipt: Option<ReviewReceipt>,
}

/// Fetches the products for `view`.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn load_products(
    gateway: &dyn ProductGateway,
    view: ReviewView,
    telemetry: &dyn TelemetrySink,
) -> Result<Vec<Product>, CatalogueError> {
    let started = Instant::now();
    let result = gateway.list_products(view).await;
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let count = result.as_ref().map_or(0, Vec::len);
    telemetry.record(TelemetryEvent::ProductsLoaded {
        view: view.to_string(),
        count,
        latency_ms,
        succeeded: result.is_ok(),
    });

    match &result {
        Ok(_) => tracing::debug!(%view, count, latency_ms, "products loaded"),
        Err(error) => tracing::warn!(%view, latency_ms, "failed to load products: {error}"),
    }
    result
}

/// Submits `decision` and reports the resulting status.
///
/// # Errors
///
/// Returns the gateway error unchanged; the caller keeps the product pending.
pub async fn dispatch_review(
    gateway: &dyn ProductGateway,
    decision: &ReviewDecision,
    telemetry: &dyn TelemetrySink,
) -> Result<ReviewOutcome, CatalogueError> {
    let product_id = decision.product_id();
    let action = decision.action();
    let result = gateway.submit_review(decision).await;

    telemetry.record(TelemetryEvent::ReviewSubmitted {
        product_id: product_id.get(),
        action: action.as_str().to_owned(),
        succeeded: result.is_ok(),
    });

    match result {
        Ok(receipt) => {
            tracing::info!(%product_id, %action, "review submitted");
            Ok(ReviewOutcome {
                product_id,
                status: action.resulting_status(),
                receipt,
            })
        }
        Err(error) => {
            tracing::warn!(%product_id, %action, "review failed: {error}");
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::{always, eq, function};
    use rstest::rstest;

    use super::{dispatch_review, load_products};
    use crate::catalogue::error::CatalogueError;
    use crate::catalogue::gateway::MockProductGateway;
    use crate::catalogue::models::test_support::pending_products;
    use crate::catalogue::models::{
        ProductId, ReviewAction, ReviewDecision, ReviewReceipt, ReviewStatus, ReviewView,
    };
    use crate::telemetry::TelemetryEvent;
    use crate::telemetry::test_support::RecordingTelemetrySink;

    #[rstest]
    #[tokio::test]
    async fn load_products_records_count() {
        let mut gateway = MockProductGateway::new();
        gateway
            .expect_list_products()
            .with(eq(ReviewView::Pending))
            .times(1)
            .returning(|_| Ok(pending_products(2)));
        let telemetry = RecordingTelemetrySink::default();

        let products = load_products(&gateway, ReviewView::Pending, &telemetry)
            .await
            .expect("load should succeed");

        assert_eq!(products.len(), 2);
        let events = telemetry.events();
        assert!(
            matches!(
                events.as_slice(),
                [TelemetryEvent::ProductsLoaded { view, count: 2, succeeded: true, .. }]
                    if view == "pending"
            ),
            "unexpected events: {events:?}"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn load_products_propagates_failure() {
        let mut gateway = MockProductGateway::new();
        gateway.expect_list_products().returning(|_| {
            Err(CatalogueError::Network {
                message: "connection refused".to_owned(),
            })
        });
        let telemetry = RecordingTelemetrySink::default();

        let error = load_products(&gateway, ReviewView::Approved, &telemetry)
            .await
            .expect_err("load should fail");

        assert!(matches!(error, CatalogueError::Network { .. }));
        assert!(matches!(
            telemetry.events().as_slice(),
            [TelemetryEvent::ProductsLoaded { count: 0, succeeded: false, .. }]
        ));
    }

    #[rstest]
    #[case::approve(ReviewAction::Approve, ReviewStatus::Approved)]
    #[case::reject(ReviewAction::Reject, ReviewStatus::Rejected)]
    #[tokio::test]
    async fn dispatch_review_reports_resulting_status(
        #[case] action: ReviewAction,
        #[case] expected: ReviewStatus,
    ) {
        let mut gateway = MockProductGateway::new();
        gateway
            .expect_submit_review()
            .with(function(move |decision: &ReviewDecision| {
                decision.product_id() == ProductId::new(4) && decision.action() == action
            }))
            .times(1)
            .returning(|_| {
                Ok(Some(ReviewReceipt {
                    message: Some("ok".to_owned()),
                    product_id: Some(ProductId::new(4)),
                }))
            });
        let telemetry = RecordingTelemetrySink::default();
        let decision = ReviewDecision::new(ProductId::new(4), action, None);

        let outcome = dispatch_review(&gateway, &decision, &telemetry)
            .await
            .expect("review should succeed");

        assert_eq!(outcome.product_id, ProductId::new(4));
        assert_eq!(outcome.status, expected);
        assert!(outcome.receipt.is_some());
        assert_eq!(
            telemetry.events(),
            vec![TelemetryEvent::ReviewSubmitted {
                product_id: 4,
                action: action.as_str().to_owned(),
                succeeded: true,
            }]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn dispatch_review_propagates_api_error() {
        let mut gateway = MockProductGateway::new();
        gateway.expect_submit_review().with(always()).returning(|_| {
            Err(CatalogueError::Api {
                status: 500,
                message: "reject product 2 failed: boom".to_owned(),
            })
        });
        let telemetry = RecordingTelemetrySink::default();
        let decision = ReviewDecision::new(ProductId::new(2), ReviewAction::Reject, None);

        let error = dispatch_review(&gateway, &decision, &telemetry)
            .await
            .expect_err("review should fail");

        assert_eq!(error.status(), Some(500));
        assert!(matches!(
            telemetry.events().as_slice(),
            [TelemetryEvent::ReviewSubmitted { succeeded: false, .. }]
        ));
    }
}
