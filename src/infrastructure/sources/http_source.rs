// src/infrastructure/sources/http_source.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::log_source::LogSource;
use crate::domain::log::LogCategory;
use crate::infrastructure::security::AdminKeyCache;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;

pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Error-log endpoints are asked for a large window in one shot; the
/// other categories return their service-side default.
const ERROR_LOG_LIMIT: &str = "10000";

/// One upstream log endpoint family (auth service or core service).
///
/// The client is expected to carry the request timeout; failures of any
/// kind surface as `Upstream` errors and are tolerated by the aggregator.
pub struct HttpLogSource {
    name: String,
    client: reqwest::Client,
    base_url: String,
    admin_key: Arc<AdminKeyCache>,
}

impl HttpLogSource {
    pub fn new(
        name: impl Into<String>,
        client: reqwest::Client,
        base_url: impl Into<String>,
        admin_key: Arc<AdminKeyCache>,
    ) -> Self {
        Self {
            name: name.into(),
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            admin_key,
        }
    }

    fn endpoint(&self, category: LogCategory) -> String {
        let path = match category {
            LogCategory::Security => "security-events",
            LogCategory::Audit => "audit-logs",
            LogCategory::Error => "error-logs",
        };
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl LogSource for HttpLogSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self, category: LogCategory) -> ApplicationResult<Value> {
        let key = self.admin_key.get().await?;

        let mut request = self
            .client
            .get(self.endpoint(category))
            .header(ADMIN_KEY_HEADER, key);
        if category == LogCategory::Error {
            request = request.query(&[("limit", ERROR_LOG_LIMIT)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApplicationError::upstream(format!("{}: {e}", self.name)))?;

        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            // Key rotated upstream; drop the cache so the next cycle
            // re-initializes.
            self.admin_key.invalidate().await;
            return Err(ApplicationError::upstream(format!(
                "{}: admin key rejected ({})",
                self.name,
                response.status()
            )));
        }

        let response = response
            .error_for_status()
            .map_err(|e| ApplicationError::upstream(format!("{}: {e}", self.name)))?;

        response
            .json::<Value>()
            .await
            .map_err(|e| ApplicationError::upstream(format!("{}: {e}", self.name)))
    }
}
