//! Date arithmetic used by the birthday queries.
//!
//! Free functions over `chrono::NaiveDate`; nothing here depends on the
//! address book.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// First date strictly after `start` that falls on `weekday`.
///
/// `next_weekday(monday, Weekday::Mon)` is the Monday one week later.
pub fn next_weekday(start: NaiveDate, weekday: Weekday) -> NaiveDate {
    let mut days_ahead =
        weekday.num_days_from_monday() as i64 - start.weekday().num_days_from_monday() as i64;
    if days_ahead <= 0 {
        days_ahead += 7;
    }
    // days_ahead is in 1..=7 here
    start + Days::new(days_ahead as u64)
}

/// The anniversary of `date` in `year`.
///
/// 29 February maps to 28 February in years without a leap day.
pub fn anniversary_in(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
        .unwrap_or(date)
}

/// Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
