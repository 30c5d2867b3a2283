// src/application/logs/filter.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::log::{AuditLog, LogCategory, Severity};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 200;

/// Relative cutoff applied against "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWindow {
    OneHour,
    Day,
    Week,
    Month,
    #[default]
    All,
}

impl TimeWindow {
    pub fn parse(s: &str) -> DomainResult<Self> {
        match s {
            "1h" => Ok(Self::OneHour),
            "24h" => Ok(Self::Day),
            "7d" => Ok(Self::Week),
            "30d" => Ok(Self::Month),
            "all" => Ok(Self::All),
            other => Err(DomainError::Validation(format!(
                "unknown time window: {other}"
            ))),
        }
    }

    pub fn cutoff(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let span = match self {
            Self::OneHour => Duration::hours(1),
            Self::Day => Duration::hours(24),
            Self::Week => Duration::days(7),
            Self::Month => Duration::days(30),
            Self::All => return None,
        };
        Some(now - span)
    }
}

/// The operator console's filter state. Every criterion is optional and
/// conjunctive; mutating any criterion snaps the viewer back to page 1 so
/// a narrower result set can never leave them on an out-of-range page.
#[derive(Debug, Clone)]
pub struct LogFilter {
    category: Option<LogCategory>,
    search: Option<String>,
    user: Option<String>,
    severity: Option<Severity>,
    action: Option<String>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    window: TimeWindow,
    page: usize,
    page_size: usize,
}

impl Default for LogFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogFilter {
    pub fn new() -> Self {
        Self {
            category: None,
            search: None,
            user: None,
            severity: None,
            action: None,
            date_from: None,
            date_to: None,
            window: TimeWindow::All,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn category(&self) -> Option<LogCategory> {
        self.category
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_category(&mut self, category: Option<LogCategory>) {
        self.category = category;
        self.page = 1;
    }

    pub fn set_search(&mut self, search: Option<String>) {
        self.search = none_if_blank(search);
        self.page = 1;
    }

    pub fn set_user(&mut self, user: Option<String>) {
        self.user = none_if_blank(user);
        self.page = 1;
    }

    pub fn set_severity(&mut self, severity: Option<Severity>) {
        self.severity = severity;
        self.page = 1;
    }

    pub fn set_action(&mut self, action: Option<String>) {
        self.action = none_if_blank(action);
        self.page = 1;
    }

    pub fn set_date_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.date_from = from;
        self.date_to = to;
        self.page = 1;
    }

    pub fn set_window(&mut self, window: TimeWindow) {
        self.window = window;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self.page = 1;
    }

    /// Apply every criterion over an already-selected base collection.
    /// Pure: same input, same output.
    pub fn apply(&self, logs: &[AuditLog], now: DateTime<Utc>) -> Vec<AuditLog> {
        logs.iter()
            .filter(|log| self.matches(log, now))
            .cloned()
            .collect()
    }

    fn matches(&self, log: &AuditLog, now: DateTime<Utc>) -> bool {
        if let Some(user) = &self.user {
            if !log
                .user
                .email
                .to_lowercase()
                .contains(&user.to_lowercase())
            {
                return false;
            }
        }
        if let Some(severity) = self.severity {
            if log.severity != Some(severity) {
                return false;
            }
        }
        if let Some(action) = &self.action {
            if !log.action.to_lowercase().contains(&action.to_lowercase()) {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            let start = Utc.from_utc_datetime(&from.and_hms_opt(0, 0, 0).unwrap_or_default());
            if log.created_at < start {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            let end = Utc.from_utc_datetime(
                &to.and_hms_milli_opt(23, 59, 59, 999).unwrap_or_default(),
            );
            if log.created_at > end {
                return false;
            }
        }
        if let Some(cutoff) = self.window.cutoff(now) {
            if log.created_at < cutoff {
                return false;
            }
        }
        if let Some(term) = &self.search {
            if !self.search_matches(log, term) {
                return false;
            }
        }
        true
    }

    fn search_matches(&self, log: &AuditLog, term: &str) -> bool {
        let needle = term.to_lowercase();
        // The ip field is matched against the raw term, unlike every other
        // field. Inherited behavior; see DESIGN.md.
        log.action.to_lowercase().contains(&needle)
            || log.details.to_lowercase().contains(&needle)
            || log
                .url
                .as_deref()
                .is_some_and(|u| u.to_lowercase().contains(&needle))
            || log.ip_address.as_deref().is_some_and(|ip| ip.contains(term))
            || log.user.email.to_lowercase().contains(&needle)
    }
}

fn none_if_blank(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}
