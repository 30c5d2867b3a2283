// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    auth_service_url: String,
    core_service_url: String,
    admin_api_key: Option<String>,
    upstream_timeout: Duration,
    allowed_origins: Option<Vec<String>>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_upstream_timeout_secs() -> u64 {
    20
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible
    /// defaults for optional values and validates required keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let auth_service_url =
            env::var("AUTH_SERVICE_URL").map_err(|_| ConfigError::Missing("AUTH_SERVICE_URL"))?;
        let core_service_url =
            env::var("CORE_SERVICE_URL").map_err(|_| ConfigError::Missing("CORE_SERVICE_URL"))?;

        for (name, url) in [
            ("AUTH_SERVICE_URL", &auth_service_url),
            ("CORE_SERVICE_URL", &core_service_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be an http(s) URL"
                )));
            }
        }

        let admin_api_key = env::var("ADMIN_API_KEY").ok().filter(|k| !k.is_empty());

        let upstream_timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or_else(default_upstream_timeout_secs);

        let allowed_origins = env::var("ALLOWED_ORIGINS").ok().and_then(parse_origin_list);

        Ok(Self {
            listen_addr,
            auth_service_url,
            core_service_url,
            admin_api_key,
            upstream_timeout: Duration::from_secs(upstream_timeout_secs),
            allowed_origins,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn auth_service_url(&self) -> &str {
        &self.auth_service_url
    }

    pub fn core_service_url(&self) -> &str {
        &self.core_service_url
    }

    /// Pre-seeded admin key; when absent the key is bootstrapped from the
    /// auth service on first use.
    pub fn admin_api_key(&self) -> Option<&str> {
        self.admin_api_key.as_deref()
    }

    pub fn upstream_timeout(&self) -> Duration {
        self.upstream_timeout
    }

    /// CORS origins to allow; `None` (the key unset or blank) means any
    /// origin, matching the pre-configuration behavior.
    pub fn allowed_origins(&self) -> Option<&[String]> {
        self.allowed_origins.as_deref()
    }
}

/// Split a comma-separated origin list, dropping blank entries. A value
/// that contains nothing but separators counts as unset.
fn parse_origin_list(raw: String) -> Option<Vec<String>> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    if origins.is_empty() { None } else { Some(origins) }
}
