use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Serialize, Serializer};
use tracing::{debug, trace};

use crate::domain::{
    DomainError,
    calendar::{anniversary_in, is_weekend, next_weekday},
    entities::record::Record,
};

/// Default look-ahead for [`AddressBook::upcoming_birthdays`], in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Output format of a congratulation date.
pub const CONGRATULATION_DATE_FORMAT: &str = "%Y.%m.%d";

/// A birthday that falls inside the look-ahead window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,
    /// Day to congratulate on; weekend birthdays move to the next Monday.
    #[serde(serialize_with = "serialize_congratulation_date")]
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `YYYY.MM.DD`.
    pub fn formatted_date(&self) -> String {
        self.congratulation_date
            .format(CONGRATULATION_DATE_FORMAT)
            .to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_date())
    }
}

fn serialize_congratulation_date<S: Serializer>(
    date: &NaiveDate,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(CONGRATULATION_DATE_FORMAT))
}

/// All contacts, keyed by name.
///
/// Iteration follows insertion order. Re-inserting an existing name replaces
/// the record in place.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record for `name`.
    pub fn delete(&mut self, name: &str) -> Result<Record, DomainError> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| DomainError::ContactNotFound {
                name: name.to_string(),
            })?;
        self.order.retain(|key| key != name);
        Ok(record)
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays whose next occurrence is at most `days` days after `today`.
    ///
    /// A birthday already past this year counts from next year. Weekend
    /// dates are moved to the following Monday, which may land past the
    /// window. Contacts without a birthday are skipped.
    pub fn upcoming_birthdays(&self, today: NaiveDate, days: u32) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for record in self.records() {
            let Some(birthday) = record.birthday() else {
                trace!(contact = %record.name(), "No birthday set, skipping");
                continue;
            };

            let mut this_year = anniversary_in(birthday.date(), today.year());
            if this_year < today {
                this_year = anniversary_in(birthday.date(), today.year() + 1);
            }

            let days_until = (this_year - today).num_days();
            if !(0..=i64::from(days)).contains(&days_until) {
                continue;
            }

            if is_weekend(this_year) {
                this_year = next_weekday(this_year, Weekday::Mon);
            }

            upcoming.push(UpcomingBirthday {
                name: record.name().as_str().to_string(),
                congratulation_date: this_year,
            });
        }

        debug!(%today, days, found = upcoming.len(), "Upcoming birthdays computed");
        upcoming
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{record}")?;
        }
        Ok(())
    }
}
