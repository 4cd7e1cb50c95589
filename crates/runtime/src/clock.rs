use chrono::{DateTime, Utc};
use game_core::env::Clock;

/// Wall clock. The only place the runtime reads real time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
