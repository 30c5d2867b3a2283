// src/domain/log/category.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// The three log streams the platform exposes to operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LogCategory {
    Security,
    Audit,
    Error,
}

impl LogCategory {
    pub const ALL: [Self; 3] = [Self::Security, Self::Audit, Self::Error];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Security => "security",
            Self::Audit => "audit",
            Self::Error => "error",
        }
    }

    /// Severity assumed when a raw record carries none.
    pub fn default_severity(self) -> Option<Severity> {
        match self {
            Self::Security => Some(Severity::Low),
            Self::Error => Some(Severity::High),
            Self::Audit => None,
        }
    }

    /// Action assumed when a raw record carries none.
    pub fn default_action(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            _ => "UNKNOWN",
        }
    }

    pub fn parse(s: &str) -> DomainResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "security" => Ok(Self::Security),
            "audit" => Ok(Self::Audit),
            "error" => Ok(Self::Error),
            other => Err(DomainError::Validation(format!(
                "unknown log category: {other}"
            ))),
        }
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }

    /// Lenient parse for raw upstream values; unknown strings yield `None`
    /// so the caller can apply a category default.
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "LOW" => Some(Self::Low),
            "MEDIUM" => Some(Self::Medium),
            "HIGH" => Some(Self::High),
            "CRITICAL" => Some(Self::Critical),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> DomainResult<Self> {
        Self::parse_lenient(s)
            .ok_or_else(|| DomainError::Validation(format!("unknown severity: {s}")))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
