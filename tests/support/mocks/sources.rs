// tests/support/mocks/sources.rs
use async_trait::async_trait;
use logdeck::application::error::{ApplicationError, ApplicationResult};
use logdeck::application::ports::log_source::LogSource;
use logdeck::domain::log::LogCategory;
use serde_json::{Value, json};
use std::collections::HashMap;

/// A source that serves canned payloads per category; categories without
/// a payload come back as an empty batch.
pub struct StaticSource {
    name: String,
    payloads: HashMap<LogCategory, Value>,
}

impl StaticSource {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            payloads: HashMap::new(),
        }
    }

    pub fn with(mut self, category: LogCategory, payload: Value) -> Self {
        self.payloads.insert(category, payload);
        self
    }
}

#[async_trait]
impl LogSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self, category: LogCategory) -> ApplicationResult<Value> {
        Ok(self
            .payloads
            .get(&category)
            .cloned()
            .unwrap_or_else(|| json!({"logs": []})))
    }
}

/// A source whose every fetch fails, standing in for an unreachable
/// upstream service.
pub struct FailingSource {
    name: String,
}

impl FailingSource {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[async_trait]
impl LogSource for FailingSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self, _category: LogCategory) -> ApplicationResult<Value> {
        Err(ApplicationError::upstream(format!(
            "{}: connection refused",
            self.name
        )))
    }
}
