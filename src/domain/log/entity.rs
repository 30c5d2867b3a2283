// src/domain/log/entity.rs
use super::category::{LogCategory, Severity};
use chrono::{DateTime, Utc};

/// The actor a log line is attributed to. Records with no resolvable
/// email are attributed to the synthetic `System` actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogActor {
    pub email: String,
    pub name: Option<String>,
}

impl LogActor {
    pub fn system() -> Self {
        Self {
            email: "System".into(),
            name: None,
        }
    }
}

/// Canonical log record. Every upstream shape collapses into this; all
/// fields the UI renders are guaranteed present or explicitly optional.
#[derive(Debug, Clone)]
pub struct AuditLog {
    pub id: String,
    pub category: LogCategory,
    pub action: String,
    pub details: String,
    pub severity: Option<Severity>,
    pub url: Option<String>,
    pub ip_address: Option<String>,
    pub user: LogActor,
    pub tenant: Option<String>,
    pub resource_type: Option<String>,
    pub resource_id: Option<String>,
    pub created_at: DateTime<Utc>,
}
