// src/presentation/http/openapi.rs
use crate::application::dto::AuditLogDto;
use crate::infrastructure::sources::ADMIN_KEY_HEADER;
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// Concrete schema for the paginated log listing (the handler itself
/// returns the generic `Page<AuditLogDto>`).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogListResponse {
    pub items: Vec<AuditLogDto>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::logs::list_logs,
        crate::presentation::http::controllers::logs::refresh_logs,
        crate::presentation::http::controllers::logs::log_stats,
        super::routes::health
    ),
    components(schemas(
        StatusResponse,
        LogListResponse,
        crate::presentation::http::error::ErrorResponse,
        crate::application::dto::AuditLogDto,
        crate::application::dto::LogActorDto,
        crate::application::dto::LogStatsDto,
        crate::application::dto::RefreshSummaryDto,
        crate::domain::log::LogCategory,
        crate::domain::log::Severity
    )),
    tags(
        (name = "Logs", description = "Aggregated platform log streams."),
        (name = "System", description = "Service health.")
    ),
    modifiers(&AdminKeySecurity)
)]
pub struct ApiDoc;

struct AdminKeySecurity;

impl Modify for AdminKeySecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "admin_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ADMIN_KEY_HEADER))),
        );
    }
}

pub fn docs_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
}
