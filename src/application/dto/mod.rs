pub mod logs;
pub mod pagination;

pub use logs::{AuditLogDto, LogActorDto, LogStatsDto, RefreshSummaryDto};
pub use pagination::Page;
