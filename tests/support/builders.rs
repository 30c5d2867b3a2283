// tests/support/builders.rs
use chrono::{DateTime, Duration, TimeZone, Utc};
use logdeck::domain::log::{AuditLog, LogActor, LogCategory, Severity};
use once_cell::sync::Lazy;

/// A fixed "now" shared by the filter and pagination tests.
pub static BASE_TIME: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());

pub fn sample_log(id: &str) -> AuditLog {
    AuditLog {
        id: id.to_string(),
        category: LogCategory::Audit,
        action: "USER_UPDATED".into(),
        details: "updated profile".into(),
        severity: None,
        url: None,
        ip_address: None,
        user: LogActor {
            email: "admin@acme.io".into(),
            name: Some("Admin".into()),
        },
        tenant: Some("Acme".into()),
        resource_type: Some("USER".into()),
        resource_id: Some("u-1".into()),
        created_at: *BASE_TIME,
    }
}

pub fn sample_log_at(id: &str, age: Duration) -> AuditLog {
    let mut log = sample_log(id);
    log.created_at = *BASE_TIME - age;
    log
}

pub fn security_log(id: &str, action: &str, severity: Severity) -> AuditLog {
    let mut log = sample_log(id);
    log.category = LogCategory::Security;
    log.action = action.to_string();
    log.severity = Some(severity);
    log
}
