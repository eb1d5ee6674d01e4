//! Tests for the HTTP catalogue gateway.

use std::time::Duration;

use rstest::{fixture, rstest};
use serde_json::json;
use tokio::runtime::Runtime;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::HttpProductGateway;
use crate::catalogue::base_url::ApiBaseUrl;
use crate::catalogue::error::CatalogueError;
use crate::catalogue::gateway::ProductGateway;
use crate::catalogue::models::{
    ProductId, ReviewAction, ReviewDecision, ReviewStatus, ReviewView,
};

type FixtureResult<T> = Result<T, Box<dyn std::error::Error>>;

struct GatewayFixture {
    runtime: Runtime,
    server: MockServer,
    gateway: HttpProductGateway,
}

impl GatewayFixture {
    fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    fn mount(&self, mock: Mock) {
        self.block_on(mock.mount(&self.server));
    }
}

#[fixture]
fn gateway_fixture() -> FixtureResult<GatewayFixture> {
    let runtime = Runtime::new()?;
    let server = runtime.block_on(MockServer::start());
    let base_url = ApiBaseUrl::parse(&server.uri())?;
    let gateway = HttpProductGateway::new(base_url, Duration::from_secs(5))?;
    Ok(GatewayFixture {
        runtime,
        server,
        gateway,
    })
}

#[rstest]
fn list_products_returns_products_in_received_order(
    gateway_fixture: FixtureResult<GatewayFixture>,
) {
    let fixture = gateway_fixture.expect("fixture should succeed");
    fixture.mount(
        Mock::given(method("GET"))
            .and(path("/products/pending"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 2, "name": "Beta", "description": "b", "website": "https://b.example",
                 "logo": null, "category": "devtools", "status": "pending"},
                {"id": 1, "name": "Alpha", "description": "a", "website": "https://a.example",
                 "logo": "https://a.example/logo.png", "category": "other", "status": "pending"}
            ]))),
    );

    let products = fixture
        .block_on(fixture.gateway.list_products(ReviewView::Pending))
        .expect("request should succeed");

    let ids: Vec<u64> = products.iter().map(|product| product.id.get()).collect();
    assert_eq!(ids, vec![2, 1], "order should match the response");
    assert!(
        products
            .iter()
            .all(|product| product.status == ReviewStatus::Pending)
    );
}

#[rstest]
fn list_products_uses_approved_endpoint(gateway_fixture: FixtureResult<GatewayFixture>) {
    let fixture = gateway_fixture.expect("fixture should succeed");
    fixture.mount(
        Mock::given(method("GET"))
            .and(path("/products/approved"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1),
    );

    let products = fixture
        .block_on(fixture.gateway.list_products(ReviewView::Approved))
        .expect("request should succeed");

    assert!(products.is_empty());
}

#[rstest]
fn list_products_maps_server_error(gateway_fixture: FixtureResult<GatewayFixture>) {
    let fixture = gateway_fixture.expect("fixture should succeed");
    fixture.mount(
        Mock::given(method("GET"))
            .and(path("/products/pending"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(json!({"detail": "Failed to get products: db down"})),
            ),
    );

    let error = fixture
        .block_on(fixture.gateway.list_products(ReviewView::Pending))
        .expect_err("500 should fail");

    assert_eq!(error.status(), Some(500));
    assert!(
        error.to_string().contains("db down"),
        "unexpected message: {error}"
    );
}

#[rstest]
fn list_products_reports_malformed_body(gateway_fixture: FixtureResult<GatewayFixture>) {
    let fixture = gateway_fixture.expect("fixture should succeed");
    fixture.mount(
        Mock::given(method("GET"))
            .and(path("/products/pending"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json")),
    );

    let error = fixture
        .block_on(fixture.gateway.list_products(ReviewView::Pending))
        .expect_err("malformed body should fail");

    assert!(
        matches!(error, CatalogueError::Decode { .. }),
        "expected decode error, got {error:?}"
    );
}

#[rstest]
fn submit_review_posts_decision_body(gateway_fixture: FixtureResult<GatewayFixture>) {
    let fixture = gateway_fixture.expect("fixture should succeed");
    fixture.mount(
        Mock::given(method("POST"))
            .and(path("/products/review/7"))
            .and(body_json(json!({
                "clean_product_id": 7,
                "action": "reject",
                "reason": "duplicate listing"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"message": "Product reject", "product_id": 7})),
            )
            .expect(1),
    );
    let decision = ReviewDecision::new(
        ProductId::new(7),
        ReviewAction::Reject,
        Some("duplicate listing".to_owned()),
    );

    let receipt = fixture
        .block_on(fixture.gateway.submit_review(&decision))
        .expect("request should succeed")
        .expect("receipt should be parsed");

    assert_eq!(receipt.message.as_deref(), Some("Product reject"));
    assert_eq!(receipt.product_id, Some(ProductId::new(7)));
}

#[rstest]
fn submit_review_accepts_empty_success_body(gateway_fixture: FixtureResult<GatewayFixture>) {
    let fixture = gateway_fixture.expect("fixture should succeed");
    fixture.mount(
        Mock::given(method("POST"))
            .and(path("/products/review/3"))
            .respond_with(ResponseTemplate::new(204)),
    );
    let decision = ReviewDecision::new(ProductId::new(3), ReviewAction::Approve, None);

    let receipt = fixture
        .block_on(fixture.gateway.submit_review(&decision))
        .expect("204 should count as success");

    assert!(receipt.is_none());
}

#[rstest]
fn submit_review_maps_not_found(gateway_fixture: FixtureResult<GatewayFixture>) {
    let fixture = gateway_fixture.expect("fixture should succeed");
    fixture.mount(
        Mock::given(method("POST"))
            .and(path("/products/review/99"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"detail": "Clean product not found"})),
            ),
    );
    let decision = ReviewDecision::new(ProductId::new(99), ReviewAction::Approve, None);

    let error = fixture
        .block_on(fixture.gateway.submit_review(&decision))
        .expect_err("404 should fail");

    assert_eq!(
        error,
        CatalogueError::Api {
            status: 404,
            message: "approve product 99 failed: Clean product not found".to_owned(),
        }
    );
}

#[rstest]
fn stats_and_health_decode(gateway_fixture: FixtureResult<GatewayFixture>) {
    let fixture = gateway_fixture.expect("fixture should succeed");
    fixture.mount(
        Mock::given(method("GET"))
            .and(path("/products/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "raw_products": {"total": 4, "pending": 0, "processing": 1, "completed": 3, "failed": 0},
                "clean_products": {"total": 3, "pending_review": 1, "approved": 1, "rejected": 1}
            }))),
    );
    fixture.mount(
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "healthy", "database": "connected"})),
            ),
    );

    let stats = fixture
        .block_on(fixture.gateway.stats())
        .expect("stats should load");
    let health = fixture
        .block_on(fixture.gateway.health())
        .expect("health should load");

    assert_eq!(stats.clean_products.pending_review, 1);
    assert!(health.is_healthy());
    assert_eq!(health.database.as_deref(), Some("connected"));
}

#[test]
fn unreachable_server_maps_to_network_error() {
    let runtime = Runtime::new().expect("runtime should start");
    // Port 9 (discard) is not served locally; the connection is refused.
    let base_url = ApiBaseUrl::parse("http://127.0.0.1:9").expect("base URL should parse");
    let gateway =
        HttpProductGateway::new(base_url, Duration::from_secs(2)).expect("gateway should build");

    let error = runtime
        .block_on(gateway.list_products(ReviewView::Pending))
        .expect_err("connection should fail");

    assert!(
        matches!(error, CatalogueError::Network { .. }),
        "expected network error, got {error:?}"
    );
}
