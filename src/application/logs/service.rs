// src/application/logs/service.rs
use super::aggregate;
use super::filter::LogFilter;
use super::normalize::normalize_batch;
use super::paginate::paginate;
use super::store::LogStore;
use crate::application::dto::{AuditLogDto, LogStatsDto, Page, RefreshSummaryDto};
use crate::application::ports::{log_source::LogSource, time::Clock};
use crate::domain::log::{AuditLog, LogCategory, Severity};
use std::sync::Arc;

/// Fetches, merges, and serves the three log streams.
///
/// Sources are queried concurrently and independently; one source being
/// down never blocks or empties the other's data. Logs are best-effort
/// telemetry, so a category whose every source failed simply comes back
/// empty instead of erroring.
pub struct LogQueryService {
    sources: Vec<Arc<dyn LogSource>>,
    clock: Arc<dyn Clock>,
    store: LogStore,
}

impl LogQueryService {
    pub fn new(sources: Vec<Arc<dyn LogSource>>, clock: Arc<dyn Clock>) -> Self {
        Self {
            sources,
            clock,
            store: LogStore::new(),
        }
    }

    /// Re-fetch one category from every source. Returns the merged record
    /// count of this cycle, even when a newer cycle won the commit race.
    pub async fn refresh_category(&self, category: LogCategory) -> usize {
        let generation = self.store.begin_refresh();
        let now = self.clock.now();

        let handles: Vec<_> = self
            .sources
            .iter()
            .map(|source| {
                let source = Arc::clone(source);
                let name = source.name().to_string();
                (name, tokio::spawn(async move { source.fetch(category).await }))
            })
            .collect();

        let mut batches = Vec::with_capacity(handles.len());
        for (name, handle) in handles {
            let batch = match handle.await {
                Ok(Ok(raw)) => normalize_batch(&raw, category, now),
                Ok(Err(err)) => {
                    tracing::warn!(
                        source = %name,
                        category = %category,
                        error = %err,
                        "log source failed, substituting empty batch"
                    );
                    Vec::new()
                }
                Err(err) => {
                    tracing::warn!(
                        source = %name,
                        category = %category,
                        error = %err,
                        "log fetch task failed, substituting empty batch"
                    );
                    Vec::new()
                }
            };
            batches.push(batch);
        }

        let merged = aggregate::merge(batches);
        let count = merged.len();
        if !self.store.commit(category, generation, merged).await {
            tracing::debug!(category = %category, "discarded stale refresh");
        }
        count
    }

    /// The manual Refresh action: re-fetch all categories concurrently.
    pub async fn refresh_all(&self) -> RefreshSummaryDto {
        let (security, audit, error) = tokio::join!(
            self.refresh_category(LogCategory::Security),
            self.refresh_category(LogCategory::Audit),
            self.refresh_category(LogCategory::Error),
        );
        RefreshSummaryDto {
            security,
            audit,
            error,
        }
    }

    pub async fn list(&self, filter: &LogFilter) -> Page<AuditLogDto> {
        let base = self.base_collection(filter.category()).await;
        let filtered = filter.apply(&base, self.clock.now());
        Page::map_from(paginate(&filtered, filter.page(), filter.page_size()))
    }

    pub async fn stats(&self) -> LogStatsDto {
        self.ensure_loaded(&LogCategory::ALL).await;
        let mut stats = LogStatsDto {
            total: 0,
            security: 0,
            audit: 0,
            error: 0,
            critical: 0,
            high: 0,
            medium: 0,
            low: 0,
        };
        for category in LogCategory::ALL {
            for log in self.store.snapshot(category).await {
                stats.total += 1;
                match log.category {
                    LogCategory::Security => stats.security += 1,
                    LogCategory::Audit => stats.audit += 1,
                    LogCategory::Error => stats.error += 1,
                }
                match log.severity {
                    Some(Severity::Critical) => stats.critical += 1,
                    Some(Severity::High) => stats.high += 1,
                    Some(Severity::Medium) => stats.medium += 1,
                    Some(Severity::Low) => stats.low += 1,
                    None => {}
                }
            }
        }
        stats
    }

    async fn base_collection(&self, category: Option<LogCategory>) -> Vec<AuditLog> {
        match category {
            Some(category) => {
                self.ensure_loaded(&[category]).await;
                self.store.snapshot(category).await
            }
            None => {
                self.ensure_loaded(&LogCategory::ALL).await;
                let mut all = Vec::new();
                for category in LogCategory::ALL {
                    all.extend(self.store.snapshot(category).await);
                }
                aggregate::sort_recent_first(&mut all);
                all
            }
        }
    }

    /// Lazily populate categories never fetched in this process.
    async fn ensure_loaded(&self, categories: &[LogCategory]) {
        for &category in categories {
            if !self.store.is_loaded(category).await {
                self.refresh_category(category).await;
            }
        }
    }
}
