//! Wall-clock adapter using the local time zone.

use addrbook_core::application::ports::Clock;
use chrono::{Local, NaiveDate};
use tracing::trace;

/// Production clock: today's date in the local time zone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        let today = Local::now().date_naive();
        trace!(%today, "Read system clock");
        today
    }
}
