// tests/support/helpers.rs
use super::builders::sample_catalog;
use super::mocks::{RecordingForwarder, StubImages, fixed_now};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use lumezza_catalog::application::ports::contact::{ContactEnvelope, ContactForwarder};
use lumezza_catalog::application::ports::images::ProductImageInventory;
use lumezza_catalog::application::ports::time::Clock;
use lumezza_catalog::application::services::ApplicationServices;
use lumezza_catalog::domain::product::{ProductCatalog, ProductReadRepository};
use lumezza_catalog::infrastructure::repositories::InMemoryProductRepository;
use lumezza_catalog::infrastructure::time::FixedClock;
use lumezza_catalog::presentation::http::middleware::rate_limit::ContactRateLimit;
use lumezza_catalog::presentation::http::routes::build_router_with_rate_limiter;
use lumezza_catalog::presentation::http::state::HttpState;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tower::ServiceExt as _;

pub const TEST_BASE_URL: &str = "https://lumezza.test";

pub struct TestApp {
    pub router: axum::Router,
    pub forwarder: Arc<RecordingForwarder>,
}

pub fn build_test_app(catalog: ProductCatalog, forwarder: RecordingForwarder) -> TestApp {
    assemble_test_app(catalog, forwarder, None)
}

/// Same wiring as [`build_test_app`] with the per-IP contact limiter enabled.
/// Requests must carry `X-Forwarded-For`, since `oneshot` has no peer address.
pub fn build_rate_limited_test_app(
    catalog: ProductCatalog,
    forwarder: RecordingForwarder,
    limit: ContactRateLimit,
) -> TestApp {
    assemble_test_app(catalog, forwarder, Some(limit))
}

fn assemble_test_app(
    catalog: ProductCatalog,
    forwarder: RecordingForwarder,
    rate_limit: Option<ContactRateLimit>,
) -> TestApp {
    let product_repo: Arc<dyn ProductReadRepository> =
        Arc::new(InMemoryProductRepository::new(catalog));
    let images: Arc<dyn ProductImageInventory> =
        Arc::new(StubImages(HashMap::from([(1, 3), (2, 1)])));
    let forwarder = Arc::new(forwarder);
    let forwarder_port: Arc<dyn ContactForwarder> = forwarder.clone();
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(fixed_now()));

    let services = Arc::new(ApplicationServices::new(
        product_repo,
        images,
        forwarder_port,
        ContactEnvelope {
            subject: "Lumezza Jewelry Contact Form Submission".into(),
            recipient: Some("owner@lumezza.test".into()),
        },
        clock,
        format!("{TEST_BASE_URL}/"),
    ));

    let state = HttpState {
        services,
        allowed_origins: vec!["http://localhost:3000".into()],
        contact_rate_limit: rate_limit.unwrap_or_default(),
    };

    TestApp {
        router: build_router_with_rate_limiter(state, rate_limit.is_some()),
        forwarder,
    }
}

pub fn make_test_router() -> axum::Router {
    build_test_app(sample_catalog(), RecordingForwarder::default()).router
}

pub async fn get(router: axum::Router, uri: &str) -> Response {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    router.oneshot(req).await.unwrap()
}

pub async fn read_body(resp: Response) -> Vec<u8> {
    body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub async fn read_json(resp: Response) -> Value {
    serde_json::from_slice(&read_body(resp).await).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
