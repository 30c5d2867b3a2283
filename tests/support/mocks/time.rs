// tests/support/mocks/time.rs
use chrono::{DateTime, Utc};
use logdeck::application::ports::time::Clock;

#[derive(Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
