// src/application/logs/normalize.rs
//
// Total normalizer: collapses the raw JSON the auth and core services
// return into canonical `AuditLog` records. The two services disagree on
// field names and nesting, so every field is resolved through a fallback
// chain and malformed records degrade to defaults instead of failing the
// batch.
use crate::domain::log::{AuditLog, LogActor, LogCategory, Severity};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

/// Normalize one raw upstream response into canonical records.
///
/// Accepts `{logs: [...]}`, `{data: {logs: [...]}}`, `{data: [...]}` or a
/// bare array; any other shape yields an empty batch. Never fails.
pub fn normalize_batch(raw: &Value, category: LogCategory, now: DateTime<Utc>) -> Vec<AuditLog> {
    extract_records(raw)
        .iter()
        .enumerate()
        .map(|(index, record)| normalize_record(record, category, index, now))
        .collect()
}

fn extract_records(raw: &Value) -> &[Value] {
    if let Some(logs) = raw.get("logs").and_then(Value::as_array) {
        return logs;
    }
    if let Some(logs) = raw
        .get("data")
        .and_then(|d| d.get("logs"))
        .and_then(Value::as_array)
    {
        return logs;
    }
    if let Some(logs) = raw.get("data").and_then(Value::as_array) {
        return logs;
    }
    raw.as_array().map(Vec::as_slice).unwrap_or(&[])
}

fn normalize_record(
    record: &Value,
    category: LogCategory,
    index: usize,
    now: DateTime<Utc>,
) -> AuditLog {
    let metadata = metadata_object(record);

    let created_at = first_value(record, &["createdAt", "timestamp"])
        .and_then(parse_timestamp)
        .unwrap_or(now);

    let id = first_scalar(record, &["id", "_id"]).unwrap_or_else(|| {
        let stamp = first_scalar(record, &["createdAt", "timestamp"])
            .unwrap_or_else(|| now.to_rfc3339());
        format!("{category}-{index}-{stamp}")
    });

    let severity = first_str(record, &["severity", "level"])
        .and_then(Severity::parse_lenient)
        .or_else(|| category.default_severity());

    let action = first_str(record, &["action", "event", "type"])
        .unwrap_or(category.default_action())
        .to_string();

    let details = resolve_details(record, metadata.as_ref());
    let url = resolve_url(record, metadata.as_ref(), &action);

    AuditLog {
        id,
        category,
        action,
        details,
        severity,
        url,
        ip_address: resolve_ip(record, metadata.as_ref()),
        user: resolve_user(record, metadata.as_ref()),
        tenant: resolve_tenant(record),
        resource_type: first_scalar(record, &["resourceType", "entity", "model"]).or_else(|| {
            (category == LogCategory::Error).then(|| "SYSTEM".to_string())
        }),
        resource_id: first_scalar(record, &["resourceId", "entityId", "targetId"]),
        created_at,
    }
}

/// `metadata` arrives either as an object or as a JSON-encoded string.
/// Parse failures are swallowed; bad metadata just contributes nothing.
fn metadata_object(record: &Value) -> Option<Value> {
    match record.get("metadata") {
        Some(Value::Object(_)) => record.get("metadata").cloned(),
        Some(Value::String(s)) => serde_json::from_str::<Value>(s)
            .ok()
            .filter(Value::is_object),
        _ => None,
    }
}

fn resolve_details(record: &Value, metadata: Option<&Value>) -> String {
    match record.get("details") {
        Some(Value::String(s)) => return s.clone(),
        Some(obj @ Value::Object(_)) => {
            if let Some(msg) = obj.get("message").and_then(Value::as_str) {
                return msg.to_string();
            }
            return serde_json::to_string(obj).unwrap_or_default();
        }
        _ => {}
    }
    first_str(record, &["message", "description"])
        .map(str::to_string)
        .or_else(|| {
            metadata
                .and_then(|m| m.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_default()
}

fn resolve_url(record: &Value, metadata: Option<&Value>, action: &str) -> Option<String> {
    if let Some(url) = record
        .get("details")
        .filter(|d| d.is_object())
        .and_then(|d| d.get("url"))
        .and_then(Value::as_str)
    {
        return Some(url.to_string());
    }
    if let Some(url) = metadata.and_then(|m| m.get("url")).and_then(Value::as_str) {
        return Some(url.to_string());
    }
    // "GET /api/x"-style actions embed the path after the method.
    action
        .split_once(' ')
        .map(|(_, rest)| rest.to_string())
}

fn resolve_user(record: &Value, metadata: Option<&Value>) -> LogActor {
    let email = record
        .get("user")
        .and_then(|u| u.get("email"))
        .and_then(Value::as_str)
        .or_else(|| first_str(record, &["userEmail", "email"]))
        .map(str::to_string)
        .or_else(|| {
            metadata
                .and_then(|m| m.get("userEmail"))
                .and_then(Value::as_str)
                .map(str::to_string)
        });

    let Some(email) = email else {
        return LogActor::system();
    };

    let name = record
        .get("user")
        .and_then(|u| u.get("name"))
        .and_then(Value::as_str)
        .or_else(|| first_str(record, &["userName", "name"]))
        .map(str::to_string)
        .or_else(|| {
            metadata
                .and_then(|m| m.get("userName"))
                .and_then(Value::as_str)
                .map(str::to_string)
        });

    LogActor { email, name }
}

fn resolve_tenant(record: &Value) -> Option<String> {
    record
        .get("tenant")
        .and_then(|t| t.get("name"))
        .and_then(Value::as_str)
        .or_else(|| first_str(record, &["tenantName", "storeName", "shopName"]))
        .map(str::to_string)
}

fn resolve_ip(record: &Value, metadata: Option<&Value>) -> Option<String> {
    first_str(record, &["ipAddress", "ip"])
        .map(str::to_string)
        .or_else(|| {
            metadata
                .and_then(|m| m.get("ipAddress"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
}

fn first_value<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    // An explicit null does not stop the chain; later keys still apply.
    keys.iter()
        .find_map(|k| record.get(k).filter(|v| !v.is_null()))
}

fn first_str<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|k| record.get(k).and_then(Value::as_str))
}

/// Strings pass through, numbers are stringified; ids and resource ids
/// show up as both upstream.
fn first_scalar(record: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| match record.get(k) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn parse_timestamp(v: &Value) -> Option<DateTime<Utc>> {
    match v {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|d| d.with_timezone(&Utc)),
        Value::Number(n) => n
            .as_i64()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        _ => None,
    }
}
