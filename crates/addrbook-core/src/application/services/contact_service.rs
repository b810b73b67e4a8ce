//! Contact Service - the assistant's use cases.
//!
//! Owns the address book for the lifetime of a session and exposes one
//! method per assistant command. Every method returns a typed result; the
//! CLI decides how to word it.

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Clock},
    domain::{AddressBook, Birthday, DomainError, Record, UpcomingBirthday},
    error::BookResult,
};

/// Whether `add_contact` created a contact or extended an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Updated,
}

/// Information about a contact for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<String>,
}

impl From<&Record> for ContactInfo {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            phones: record.phones().iter().map(ToString::to_string).collect(),
            birthday: record.birthday().map(ToString::to_string),
        }
    }
}

/// Main contact service.
pub struct ContactService {
    book: AddressBook,
    clock: Box<dyn Clock>,
}

impl ContactService {
    /// Create a service with an empty address book.
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self::with_book(AddressBook::new(), clock)
    }

    /// Create a service around an existing book.
    pub fn with_book(book: AddressBook, clock: Box<dyn Clock>) -> Self {
        Self { book, clock }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Add `phone` to `name`, creating the contact if needed.
    ///
    /// A new contact is only stored once its name and first phone are both
    /// valid.
    #[instrument(skip(self))]
    pub fn add_contact(&mut self, name: &str, phone: &str) -> BookResult<AddOutcome> {
        if let Some(record) = self.book.find_mut(name) {
            record.add_phone(phone)?;
            debug!("Phone added to existing contact");
            return Ok(AddOutcome::Updated);
        }

        let mut record = Record::new(name)?;
        record.add_phone(phone)?;
        self.book.add_record(record);
        info!(contacts = self.book.len(), "Contact added");
        Ok(AddOutcome::Added)
    }

    /// Replace one of a contact's phones.
    #[instrument(skip(self))]
    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> BookResult<()> {
        self.record_mut(name)?.edit_phone(old, new)?;
        Ok(())
    }

    /// Look up a contact.
    pub fn contact(&self, name: &str) -> BookResult<&Record> {
        self.book.find(name).ok_or_else(|| not_found(name))
    }

    /// Every contact, in the order they were added.
    pub fn contacts(&self) -> Vec<ContactInfo> {
        self.book.records().map(ContactInfo::from).collect()
    }

    /// Set or replace a contact's birthday.
    #[instrument(skip(self))]
    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> BookResult<()> {
        self.record_mut(name)?.add_birthday(birthday)?;
        Ok(())
    }

    /// A contact's birthday, if one is set.
    pub fn birthday(&self, name: &str) -> BookResult<Option<&Birthday>> {
        Ok(self.contact(name)?.birthday())
    }

    /// Birthdays coming up within `days` days of the clock's today.
    pub fn upcoming_birthdays(&self, days: u32) -> Vec<UpcomingBirthday> {
        self.book.upcoming_birthdays(self.clock.today(), days)
    }

    /// Remove a contact and hand it back.
    #[instrument(skip(self))]
    pub fn delete_contact(&mut self, name: &str) -> BookResult<Record> {
        let record = self.book.delete(name)?;
        info!(contacts = self.book.len(), "Contact deleted");
        Ok(record)
    }

    /// Remove one of a contact's phones. `Ok(false)` when it had no such phone.
    #[instrument(skip(self))]
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> BookResult<bool> {
        Ok(self.record_mut(name)?.remove_phone(phone))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn record_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.book.find_mut(name).ok_or_else(|| not_found(name))
    }
}

fn not_found(name: &str) -> crate::error::BookError {
    DomainError::ContactNotFound {
        name: name.to_string(),
    }
    .into()
}

/// Parse a user-supplied look-ahead window in days.
pub fn parse_window(raw: &str) -> BookResult<u32> {
    raw.parse::<u32>().map_err(|_| {
        ApplicationError::InvalidWindow {
            value: raw.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::application::ports::clock::MockClock;
    use crate::error::BookError;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service_at(today: NaiveDate) -> ContactService {
        let mut clock = MockClock::new();
        clock.expect_today().return_const(today);
        ContactService::new(Box::new(clock))
    }

    fn service() -> ContactService {
        // Clock must not be consulted by anything but birthday queries.
        ContactService::new(Box::new(MockClock::new()))
    }

    #[test]
    fn add_contact_reports_added_then_updated() {
        let mut svc = service();
        assert_eq!(
            svc.add_contact("John", "1234567890").unwrap(),
            AddOutcome::Added
        );
        assert_eq!(
            svc.add_contact("John", "1234567890").unwrap(),
            AddOutcome::Updated
        );
        assert_eq!(
            svc.contact("John").unwrap().phone_list(),
            "1234567890; 1234567890"
        );
    }

    #[test]
    fn add_contact_with_bad_phone_stores_nothing() {
        let mut svc = service();
        let err = svc.add_contact("John", "123").unwrap_err();
        assert!(matches!(err, BookError::Domain(DomainError::Validation { .. })));
        assert!(svc.book().is_empty());
    }

    #[test]
    fn add_contact_with_bad_name_fails() {
        let mut svc = service();
        assert!(svc.add_contact("J", "1234567890").is_err());
        assert!(svc.book().is_empty());
    }

    #[test]
    fn change_phone_requires_contact() {
        let mut svc = service();
        let err = svc
            .change_phone("Ghost", "1234567890", "0987654321")
            .unwrap_err();
        assert_eq!(err.to_string(), "Contact not found: Ghost");
    }

    #[test]
    fn change_phone_replaces() {
        let mut svc = service();
        svc.add_contact("John", "1111111111").unwrap();
        svc.change_phone("John", "1111111111", "2222222222").unwrap();
        assert_eq!(svc.contact("John").unwrap().phone_list(), "2222222222");
    }

    #[test]
    fn change_missing_phone_is_not_found() {
        let mut svc = service();
        svc.add_contact("John", "1111111111").unwrap();
        let err = svc
            .change_phone("John", "3333333333", "2222222222")
            .unwrap_err();
        assert_eq!(err.to_string(), "Phone not found: 3333333333");
    }

    #[test]
    fn birthday_round_trip() {
        let mut svc = service();
        svc.add_contact("John", "1111111111").unwrap();
        assert!(svc.birthday("John").unwrap().is_none());

        svc.add_birthday("John", "24.08.1991").unwrap();
        assert_eq!(svc.birthday("John").unwrap().unwrap().as_str(), "24.08.1991");
    }

    #[test]
    fn birthday_of_unknown_contact_fails() {
        let mut svc = service();
        assert!(svc.birthday("Ghost").is_err());
        assert!(svc.add_birthday("Ghost", "24.08.1991").is_err());
    }

    #[test]
    fn contacts_lists_in_insertion_order() {
        let mut svc = service();
        svc.add_contact("John", "1111111111").unwrap();
        svc.add_contact("Jane", "2222222222").unwrap();
        svc.add_birthday("Jane", "01.01.1990").unwrap();

        let contacts = svc.contacts();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].name, "John");
        assert_eq!(contacts[1].birthday.as_deref(), Some("01.01.1990"));
    }

    #[test]
    fn upcoming_birthdays_reads_the_clock() {
        let mut svc = service_at(ymd(2024, 6, 6));
        svc.add_contact("John", "1111111111").unwrap();
        svc.add_birthday("John", "08.06.2020").unwrap();

        let upcoming = svc.upcoming_birthdays(7);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].formatted_date(), "2024.06.10");
    }

    #[test]
    fn delete_contact_then_lookup_fails() {
        let mut svc = service();
        svc.add_contact("John", "1111111111").unwrap();
        let record = svc.delete_contact("John").unwrap();
        assert_eq!(record.name().as_str(), "John");
        assert!(svc.contact("John").is_err());
        assert!(svc.delete_contact("John").is_err());
    }

    #[test]
    fn remove_phone_reports_whether_removed() {
        let mut svc = service();
        svc.add_contact("John", "1111111111").unwrap();
        assert!(!svc.remove_phone("John", "2222222222").unwrap());
        assert!(svc.remove_phone("John", "1111111111").unwrap());
        assert!(svc.remove_phone("Ghost", "1111111111").is_err());
    }

    #[test]
    fn parse_window_accepts_whole_days() {
        assert_eq!(parse_window("0").unwrap(), 0);
        assert_eq!(parse_window("14").unwrap(), 14);
        assert!(matches!(
            parse_window("-1"),
            Err(BookError::Application(ApplicationError::InvalidWindow { .. }))
        ));
        assert!(parse_window("soon").is_err());
    }
}
