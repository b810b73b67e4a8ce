//! Driven port for reading the current date.

use chrono::NaiveDate;

/// Port for the calendar date the birthday queries count from.
///
/// Implemented by:
/// - `addrbook_adapters::clock::SystemClock` (production, local time zone)
/// - `addrbook_adapters::clock::FixedClock` (tests and replays)
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Today's date, without a time component.
    fn today(&self) -> NaiveDate;
}
