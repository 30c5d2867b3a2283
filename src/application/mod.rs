pub mod dto;
pub mod error;
pub mod logs;
pub mod ports;

pub use error::{ApplicationError, ApplicationResult};
