// tests/support/helpers.rs
use crate::support::mocks::FixedClock;
use axum::Router;
use logdeck::application::logs::LogQueryService;
use logdeck::application::ports::{log_source::LogSource, time::Clock};
use logdeck::infrastructure::security::AdminKeyCache;
use logdeck::presentation::http::{routes::build_router, state::HttpState};
use std::sync::Arc;

pub const TEST_ADMIN_KEY: &str = "test-admin-key";

/// A key cache pre-seeded with the test key; the bootstrap URL is never
/// contacted.
pub fn test_admin_key_cache() -> Arc<AdminKeyCache> {
    Arc::new(AdminKeyCache::new(
        reqwest::Client::new(),
        "http://127.0.0.1:0".into(),
        Some(TEST_ADMIN_KEY.into()),
    ))
}

pub fn make_service(sources: Vec<Arc<dyn LogSource>>) -> Arc<LogQueryService> {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock(*crate::support::builders::BASE_TIME));
    Arc::new(LogQueryService::new(sources, clock))
}

pub fn make_test_router(sources: Vec<Arc<dyn LogSource>>) -> Router {
    make_test_router_with_origins(sources, None)
}

pub fn make_test_router_with_origins(
    sources: Vec<Arc<dyn LogSource>>,
    allowed_origins: Option<&[String]>,
) -> Router {
    build_router(
        HttpState {
            logs: make_service(sources),
            admin_key: test_admin_key_cache(),
        },
        allowed_origins,
    )
}
