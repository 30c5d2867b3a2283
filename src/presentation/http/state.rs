// src/presentation/http/state.rs
use crate::application::logs::LogQueryService;
use crate::infrastructure::security::AdminKeyCache;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub logs: Arc<LogQueryService>,
    pub admin_key: Arc<AdminKeyCache>,
}
