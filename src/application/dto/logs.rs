// src/application/dto/logs.rs
use crate::domain::log::{AuditLog, LogActor, LogCategory, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogActorDto {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogDto {
    pub id: String,
    pub category: LogCategory,
    pub action: String,
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    pub user: LogActorDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<LogActor> for LogActorDto {
    fn from(a: LogActor) -> Self {
        Self {
            email: a.email,
            name: a.name,
        }
    }
}

impl From<AuditLog> for AuditLogDto {
    fn from(l: AuditLog) -> Self {
        Self {
            id: l.id,
            category: l.category,
            action: l.action,
            details: l.details,
            severity: l.severity,
            url: l.url,
            ip_address: l.ip_address,
            user: l.user.into(),
            tenant: l.tenant,
            resource_type: l.resource_type,
            resource_id: l.resource_id,
            created_at: l.created_at,
        }
    }
}

/// Counters behind the operator console's stat cards.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogStatsDto {
    pub total: usize,
    pub security: usize,
    pub audit: usize,
    pub error: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Per-category record counts after a forced refresh.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RefreshSummaryDto {
    pub security: usize,
    pub audit: usize,
    pub error: usize,
}
