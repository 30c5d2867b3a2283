// src/application/logs/aggregate.rs
use crate::domain::log::AuditLog;
use std::collections::HashSet;

/// Merge normalized batches in source order.
///
/// The first record seen for a given id wins, so a source listed earlier
/// shadows later ones. The result is sorted most recent first.
pub fn merge(batches: Vec<Vec<AuditLog>>) -> Vec<AuditLog> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged: Vec<AuditLog> = Vec::new();
    for batch in batches {
        for log in batch {
            if seen.insert(log.id.clone()) {
                merged.push(log);
            }
        }
    }
    sort_recent_first(&mut merged);
    merged
}

/// Stable sort by `created_at` descending; records with equal timestamps
/// keep their merge order.
pub fn sort_recent_first(logs: &mut [AuditLog]) {
    logs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
