pub mod category;
pub mod entity;

pub use category::{LogCategory, Severity};
pub use entity::{AuditLog, LogActor};
