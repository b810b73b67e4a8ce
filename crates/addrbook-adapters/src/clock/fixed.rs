//! Settable clock for tests and replays.

use std::sync::{Arc, RwLock};

use addrbook_core::application::ports::Clock;
use chrono::{Days, NaiveDate};

/// A clock that always reports the date it was set to.
///
/// Clones share the same date, so a test can keep a handle and move time
/// forward after handing the clock to a service.
#[derive(Debug, Clone)]
pub struct FixedClock {
    inner: Arc<RwLock<NaiveDate>>,
}

impl FixedClock {
    /// Create a clock frozen at `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            inner: Arc::new(RwLock::new(today)),
        }
    }

    /// Move the clock to `date`.
    pub fn set(&self, date: NaiveDate) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *inner = date;
    }

    /// Move the clock forward by `days`.
    pub fn advance(&self, days: u64) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *inner = *inner + Days::new(days);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.inner.read().unwrap_or_else(|e| e.into_inner())
    }
}
