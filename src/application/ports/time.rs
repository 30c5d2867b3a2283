// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for the pipeline.
///
/// The normalizer stamps records that carry no parseable timestamp with
/// the refresh time, and relative time windows are cut against the same
/// instant, so tests pin this to a fixed moment.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
