// tests/e2e_logs_api.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use logdeck::application::ports::log_source::LogSource;
use logdeck::domain::log::LogCategory;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::util::ServiceExt as _;

mod support;
use support::helpers::{TEST_ADMIN_KEY, make_test_router, make_test_router_with_origins};
use support::mocks::StaticSource;

fn seeded_router() -> axum::Router {
    let auth = StaticSource::new("auth")
        .with(
            LogCategory::Security,
            json!({"logs": [
                {"id": "s1", "action": "LOGIN_FAILED", "severity": "HIGH",
                 "createdAt": "2024-05-01T10:00:00Z", "userEmail": "admin@acme.io"},
                {"id": "s2", "action": "IP_BLOCKED", "severity": "CRITICAL",
                 "createdAt": "2024-05-01T11:00:00Z"},
            ]}),
        )
        .with(
            LogCategory::Audit,
            json!({"logs": [
                {"id": "a1", "action": "PLAN_CHANGED", "createdAt": "2024-05-02T09:00:00Z"},
            ]}),
        );
    let core = StaticSource::new("core").with(
        LogCategory::Error,
        json!({"data": {"logs": [
            {"_id": "e1", "message": "boom", "timestamp": "2024-05-03T08:00:00Z"},
        ]}}),
    );
    let sources: Vec<Arc<dyn LogSource>> = vec![Arc::new(auth), Arc::new(core)];
    make_test_router(sources)
}

fn get(uri: &str, key: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(key) = key {
        builder = builder.header("x-admin-key", key);
    }
    builder.body(Body::empty()).unwrap()
}

async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_needs_no_key() {
    let app = seeded_router();
    let resp = app.oneshot(get("/health", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = json_body(resp).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn missing_admin_key_is_rejected() {
    let app = seeded_router();
    let resp = app.oneshot(get("/api/v1/logs", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn wrong_admin_key_is_rejected() {
    let app = seeded_router();
    let resp = app
        .oneshot(get("/api/v1/logs", Some("not-the-key")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn lists_the_union_of_all_categories() {
    let app = seeded_router();
    let resp = app
        .oneshot(get("/api/v1/logs", Some(TEST_ADMIN_KEY)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = json_body(resp).await;
    assert_eq!(json["total"], 4);
    let items = json["items"].as_array().unwrap();
    // Most recent first across categories.
    assert_eq!(items[0]["id"], "e1");
    assert_eq!(items[1]["id"], "a1");
    // The error record was normalized: synthesized fields are present.
    assert_eq!(items[0]["action"], "ERROR");
    assert_eq!(items[0]["details"], "boom");
    assert_eq!(items[0]["resourceType"], "SYSTEM");
    assert_eq!(items[0]["user"]["email"], "System");
}

#[tokio::test]
async fn category_and_severity_filters_narrow_the_result() {
    let app = seeded_router();
    let resp = app
        .oneshot(get(
            "/api/v1/logs?category=security&severity=CRITICAL",
            Some(TEST_ADMIN_KEY),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = json_body(resp).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["items"][0]["id"], "s2");
}

#[tokio::test]
async fn pagination_parameters_slice_the_result() {
    let app = seeded_router();
    let resp = app
        .oneshot(get(
            "/api/v1/logs?page=2&page_size=1",
            Some(TEST_ADMIN_KEY),
        ))
        .await
        .unwrap();
    let json = json_body(resp).await;
    assert_eq!(json["page"], 2);
    assert_eq!(json["pageSize"], 1);
    assert_eq!(json["total"], 4);
    assert_eq!(json["totalPages"], 4);
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["items"][0]["id"], "a1");
}

#[tokio::test]
async fn invalid_severity_is_a_bad_request() {
    let app = seeded_router();
    let resp = app
        .oneshot(get("/api/v1/logs?severity=SHOUTING", Some(TEST_ADMIN_KEY)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn refresh_returns_per_category_counts() {
    let app = seeded_router();
    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/logs/refresh")
        .header("x-admin-key", TEST_ADMIN_KEY)
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = json_body(resp).await;
    assert_eq!(json["security"], 2);
    assert_eq!(json["audit"], 1);
    assert_eq!(json["error"], 1);
}

#[tokio::test]
async fn cors_defaults_to_any_origin() {
    let app = seeded_router();
    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .header("origin", "https://anywhere.example")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn configured_cors_origins_restrict_the_allow_header() {
    let origins = vec!["https://ops.example".to_string()];
    let app = make_test_router_with_origins(vec![], Some(&origins));

    let allowed = Request::builder()
        .method("GET")
        .uri("/health")
        .header("origin", "https://ops.example")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(allowed).await.unwrap();
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("https://ops.example")
    );

    let rejected = Request::builder()
        .method("GET")
        .uri("/health")
        .header("origin", "https://elsewhere.example")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(rejected).await.unwrap();
    assert!(resp.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn stats_count_categories_and_severities() {
    let app = seeded_router();
    let resp = app
        .oneshot(get("/api/v1/logs/stats", Some(TEST_ADMIN_KEY)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = json_body(resp).await;
    assert_eq!(json["total"], 4);
    assert_eq!(json["security"], 2);
    assert_eq!(json["audit"], 1);
    assert_eq!(json["error"], 1);
    assert_eq!(json["critical"], 1);
    // s1 is HIGH and the error record defaults to HIGH.
    assert_eq!(json["high"], 2);
}
