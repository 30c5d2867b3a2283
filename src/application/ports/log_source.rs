// src/application/ports/log_source.rs
use crate::application::error::ApplicationResult;
use crate::domain::log::LogCategory;
use async_trait::async_trait;
use serde_json::Value;

/// One upstream service that can be asked for a batch of raw logs.
///
/// Implementations return whatever JSON the service produced; shaping it
/// into canonical records is the normalizer's job, and a failed fetch is
/// tolerated by the aggregator rather than surfaced to callers.
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Short identifier used in traces ("auth", "core").
    fn name(&self) -> &str;

    async fn fetch(&self, category: LogCategory) -> ApplicationResult<Value>;
}
