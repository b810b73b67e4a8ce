use std::fmt;

use tracing::debug;

use crate::domain::{
    DomainError,
    value_objects::{Birthday, Name, Phone},
};

/// One contact: a name, its phones in insertion order, and an optional
/// birthday.
///
/// Invariants:
/// - `name` is fixed at construction
/// - `phones` may hold duplicates
/// - at most one birthday; setting it again replaces the old one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a contact with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), DomainError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Set or replace the birthday.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), DomainError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// First phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| *p == phone)
    }

    /// Replace `old` with `new`.
    ///
    /// The replacement goes to the end of the list. If `new` fails
    /// validation the record is left exactly as it was.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), DomainError> {
        let index = self
            .phones
            .iter()
            .position(|p| p == old)
            .ok_or_else(|| DomainError::PhoneNotFound {
                phone: old.to_string(),
            })?;

        let replacement = Phone::new(new)?;
        self.phones.push(replacement);
        self.phones.remove(index);

        debug!(contact = %self.name, old, new, "Phone edited");
        Ok(())
    }

    /// Remove the first phone equal to `phone`. Returns whether one was removed.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.phones.iter().position(|p| p == phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Phones joined with `"; "`.
    pub fn phone_list(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday {}",
            self.name,
            self.phone_list(),
            self.birthday
                .as_ref()
                .map_or("none", |birthday| birthday.as_str())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Record {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1111111111").unwrap();
        record
    }

    #[test]
    fn new_record_is_empty() {
        let record = Record::new("John").unwrap();
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn new_record_validates_name() {
        assert!(Record::new("J").is_err());
    }

    #[test]
    fn add_phone_keeps_order_and_duplicates() {
        let mut record = john();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();
        assert_eq!(record.phone_list(), "1111111111; 2222222222; 1111111111");
    }

    #[test]
    fn add_phone_rejects_invalid() {
        let mut record = john();
        assert!(record.add_phone("12345").is_err());
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn add_birthday_replaces() {
        let mut record = john();
        record.add_birthday("01.01.1990").unwrap();
        record.add_birthday("02.02.1992").unwrap();
        assert_eq!(record.birthday().unwrap().as_str(), "02.02.1992");
    }

    #[test]
    fn failed_birthday_keeps_previous() {
        let mut record = john();
        record.add_birthday("01.01.1990").unwrap();
        assert!(record.add_birthday("1990-01-01").is_err());
        assert_eq!(record.birthday().unwrap().as_str(), "01.01.1990");
    }

    #[test]
    fn find_phone_returns_match() {
        let record = john();
        assert_eq!(record.find_phone("1111111111").unwrap().as_str(), "1111111111");
        assert!(record.find_phone("9999999999").is_none());
    }

    #[test]
    fn edit_phone_replaces_single_entry() {
        let mut record = john();
        record.edit_phone("1111111111", "2222222222").unwrap();
        assert_eq!(record.phone_list(), "2222222222");
    }

    #[test]
    fn edit_phone_appends_replacement() {
        let mut record = john();
        record.add_phone("3333333333").unwrap();
        record.edit_phone("1111111111", "2222222222").unwrap();
        assert_eq!(record.phone_list(), "3333333333; 2222222222");
    }

    #[test]
    fn edit_missing_phone_fails_and_leaves_phones() {
        let mut record = john();
        let err = record.edit_phone("9999999999", "2222222222").unwrap_err();
        assert_eq!(
            err,
            DomainError::PhoneNotFound {
                phone: "9999999999".into()
            }
        );
        assert_eq!(record.phone_list(), "1111111111");
    }

    #[test]
    fn edit_with_invalid_replacement_leaves_phones() {
        let mut record = john();
        assert!(matches!(
            record.edit_phone("1111111111", "abc"),
            Err(DomainError::Validation { .. })
        ));
        assert_eq!(record.phone_list(), "1111111111");
    }

    #[test]
    fn remove_phone_is_noop_when_absent() {
        let mut record = john();
        assert!(!record.remove_phone("9999999999"));
        assert!(record.remove_phone("1111111111"));
        assert!(record.phones().is_empty());
    }

    #[test]
    fn renders_contact_line() {
        let mut record = john();
        record.add_phone("2222222222").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1111111111; 2222222222, birthday none"
        );

        record.add_birthday("24.08.1991").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1111111111; 2222222222, birthday 24.08.1991"
        );
    }
}
