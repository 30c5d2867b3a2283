// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::logs,
    middleware::require_admin_key,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// `allowed_origins: None` keeps the permissive default; a configured
/// list restricts CORS to exactly those origins.
pub fn build_router(state: HttpState, allowed_origins: Option<&[String]>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(origin_policy(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let admin = Router::new()
        .route("/api/v1/logs", get(logs::list_logs))
        .route("/api/v1/logs/refresh", post(logs::refresh_logs))
        .route("/api/v1/logs/stats", get(logs::log_stats))
        .layer(axum::middleware::from_fn(require_admin_key));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(admin)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

fn origin_policy(allowed_origins: Option<&[String]>) -> AllowOrigin {
    match allowed_origins {
        Some(origins) => {
            let parsed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(%origin, "ignoring malformed CORS origin");
                        None
                    }
                })
                .collect();
            AllowOrigin::list(parsed)
        }
        None => AllowOrigin::any(),
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
