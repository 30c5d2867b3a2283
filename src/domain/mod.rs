pub mod errors;
pub mod log;
