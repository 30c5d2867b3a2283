pub mod aggregate;
pub mod filter;
pub mod normalize;
pub mod paginate;
pub mod service;
pub mod store;


pub use filter::{LogFilter, TimeWindow};
pub use service::LogQueryService;
