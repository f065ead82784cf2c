//! Shared helpers for unit tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock that advances one second on every reading, starting at a fixed
/// instant, so insertion order is visible in timestamps.
#[derive(Debug, Default)]
pub struct SteppingClock {
    ticks: AtomicI64,
}

impl SteppingClock {
    /// First instant the clock reports.
    #[must_use]
    pub fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0)
            .single()
            .expect("valid fixed instant")
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        Self::start() + chrono::Duration::seconds(tick)
    }
}
