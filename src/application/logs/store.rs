// src/application/logs/store.rs
use crate::domain::log::{AuditLog, LogCategory};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
struct CategoryState {
    logs: Vec<AuditLog>,
    loaded: bool,
    generation: u64,
}

/// In-memory per-category snapshot of the latest fetch cycle.
///
/// Snapshots are full replacements, never deltas, and nothing survives a
/// restart. A process-wide generation counter orders concurrent refreshes:
/// a refresh that started earlier but finished later is discarded, so the
/// newest cycle always wins.
pub struct LogStore {
    categories: RwLock<HashMap<LogCategory, CategoryState>>,
    generation: AtomicU64,
}

impl Default for LogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LogStore {
    pub fn new() -> Self {
        Self {
            categories: RwLock::new(HashMap::new()),
            generation: AtomicU64::new(0),
        }
    }

    /// Reserve a generation for a refresh about to start.
    pub fn begin_refresh(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Commit a finished refresh. Returns false when a newer refresh has
    /// already committed for this category, in which case the result is
    /// dropped.
    pub async fn commit(
        &self,
        category: LogCategory,
        generation: u64,
        logs: Vec<AuditLog>,
    ) -> bool {
        let mut categories = self.categories.write().await;
        let state = categories.entry(category).or_default();
        if generation < state.generation {
            return false;
        }
        state.generation = generation;
        state.logs = logs;
        state.loaded = true;
        true
    }

    pub async fn snapshot(&self, category: LogCategory) -> Vec<AuditLog> {
        self.categories
            .read()
            .await
            .get(&category)
            .map(|s| s.logs.clone())
            .unwrap_or_default()
    }

    pub async fn is_loaded(&self, category: LogCategory) -> bool {
        self.categories
            .read()
            .await
            .get(&category)
            .is_some_and(|s| s.loaded)
    }
}
