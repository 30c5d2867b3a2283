pub mod sources;
pub mod time;

pub use sources::{FailingSource, StaticSource};
pub use time::FixedClock;
