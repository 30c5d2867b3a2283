pub mod log_source;
pub mod time;
