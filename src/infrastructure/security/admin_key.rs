// src/infrastructure/security/admin_key.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use constant_time_eq::constant_time_eq;
use serde::Deserialize;
use tokio::sync::RwLock;

#[derive(Debug, Deserialize)]
struct BootstrapResponse {
    #[serde(rename = "adminApiKey")]
    admin_api_key: String,
}

/// The platform admin API key, fetched once from the auth service and
/// cached for the life of the process.
///
/// Rotation upstream shows up as a 401 on the next call; the caller then
/// invalidates this cache and the following cycle re-initializes. The key
/// is also what inbound admin requests must present, compared in constant
/// time.
pub struct AdminKeyCache {
    client: reqwest::Client,
    auth_base_url: String,
    key: RwLock<Option<String>>,
}

impl AdminKeyCache {
    /// `preset` short-circuits the bootstrap call, for deployments that
    /// inject the key through configuration.
    pub fn new(client: reqwest::Client, auth_base_url: String, preset: Option<String>) -> Self {
        Self {
            client,
            auth_base_url,
            key: RwLock::new(preset),
        }
    }

    pub async fn get(&self) -> ApplicationResult<String> {
        if let Some(key) = self.key.read().await.clone() {
            return Ok(key);
        }
        self.initialize().await
    }

    /// Fetch the key from the auth service and cache it.
    pub async fn initialize(&self) -> ApplicationResult<String> {
        let url = format!(
            "{}/admin/bootstrap",
            self.auth_base_url.trim_end_matches('/')
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApplicationError::upstream(format!("admin key bootstrap: {e}")))?
            .error_for_status()
            .map_err(|e| ApplicationError::upstream(format!("admin key bootstrap: {e}")))?;
        let body: BootstrapResponse = response
            .json()
            .await
            .map_err(|e| ApplicationError::upstream(format!("admin key bootstrap: {e}")))?;

        let mut guard = self.key.write().await;
        *guard = Some(body.admin_api_key.clone());
        Ok(body.admin_api_key)
    }

    pub async fn invalidate(&self) {
        *self.key.write().await = None;
    }

    pub async fn verify(&self, presented: &str) -> ApplicationResult<bool> {
        let key = self.get().await?;
        Ok(constant_time_eq(presented.as_bytes(), key.as_bytes()))
    }
}
