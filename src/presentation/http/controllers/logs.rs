// src/presentation/http/controllers/logs.rs
use crate::application::dto::{AuditLogDto, LogStatsDto, Page, RefreshSummaryDto};
use crate::application::error::ApplicationResult;
use crate::application::logs::{LogFilter, TimeWindow};
use crate::domain::log::{LogCategory, Severity};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct LogListParams {
    /// `security`, `audit`, `error`, or `all` (default).
    pub category: Option<String>,
    /// Free-text search over action, details, url, ip, and user email.
    pub search: Option<String>,
    /// Substring match against the actor email.
    pub user: Option<String>,
    /// Exact severity: LOW, MEDIUM, HIGH, or CRITICAL.
    pub severity: Option<String>,
    /// Substring match against the action.
    pub action: Option<String>,
    /// Inclusive start date (YYYY-MM-DD).
    pub date_from: Option<NaiveDate>,
    /// Inclusive end date (YYYY-MM-DD).
    pub date_to: Option<NaiveDate>,
    /// Relative window: 1h, 24h, 7d, 30d, or all (default).
    pub window: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

fn build_filter(params: LogListParams) -> ApplicationResult<LogFilter> {
    let mut filter = LogFilter::new();

    let category = match params.category.as_deref() {
        None | Some("all") | Some("") => None,
        Some(raw) => Some(LogCategory::parse(raw)?),
    };
    filter.set_category(category);
    filter.set_user(params.user);

    let severity = match params.severity.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(Severity::parse(raw)?),
    };
    filter.set_severity(severity);
    filter.set_action(params.action);
    filter.set_date_range(params.date_from, params.date_to);

    if let Some(raw) = params.window.as_deref().filter(|w| !w.is_empty()) {
        filter.set_window(TimeWindow::parse(raw)?);
    }
    filter.set_search(params.search);

    if let Some(page_size) = params.page_size {
        filter.set_page_size(page_size);
    }
    if let Some(page) = params.page {
        filter.set_page(page);
    }
    Ok(filter)
}

#[utoipa::path(
    get,
    path = "/api/v1/logs",
    params(LogListParams),
    responses(
        (status = 200, description = "Filtered, paginated logs.", body = crate::presentation::http::openapi::LogListResponse),
        (status = 400, description = "Invalid filter parameter.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid admin key.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("admin_key" = [])),
    tag = "Logs"
)]
pub async fn list_logs(
    Extension(state): Extension<HttpState>,
    Query(params): Query<LogListParams>,
) -> HttpResult<Json<Page<AuditLogDto>>> {
    let filter = build_filter(params).into_http()?;
    Ok(Json(state.logs.list(&filter).await))
}

#[utoipa::path(
    post,
    path = "/api/v1/logs/refresh",
    responses(
        (status = 200, description = "Per-category record counts after the refresh.", body = RefreshSummaryDto),
        (status = 401, description = "Missing or invalid admin key.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("admin_key" = [])),
    tag = "Logs"
)]
pub async fn refresh_logs(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<RefreshSummaryDto>> {
    Ok(Json(state.logs.refresh_all().await))
}

#[utoipa::path(
    get,
    path = "/api/v1/logs/stats",
    responses(
        (status = 200, description = "Totals per category and severity.", body = LogStatsDto),
        (status = 401, description = "Missing or invalid admin key.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("admin_key" = [])),
    tag = "Logs"
)]
pub async fn log_stats(Extension(state): Extension<HttpState>) -> HttpResult<Json<LogStatsDto>> {
    Ok(Json(state.logs.stats().await))
}
