//! Domain value objects: Name, Phone, Birthday.
//!
//! # Design
//!
//! These are validated value types. Each one checks its input once, at
//! construction, and is immutable afterwards; replacing a value means
//! building a new one. They share a single capability, rendering back to the
//! text they were built from, which is expressed through `Display` and
//! `as_str`.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Length of a valid phone number.
pub const PHONE_LENGTH: usize = 10;

/// Minimum length of a contact name, in characters.
pub const MIN_NAME_LENGTH: usize = 2;

/// Input format accepted by [`Birthday`] (`DD.MM.YYYY`).
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// ── Name ─────────────────────────────────────────────────────────────────────

/// A contact's name. At least two characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.chars().count() < MIN_NAME_LENGTH {
            return Err(DomainError::validation(
                "name",
                format!("Name must be at least {MIN_NAME_LENGTH} characters long"),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Name {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ── Phone ────────────────────────────────────────────────────────────────────

/// A phone number: exactly ten ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.chars().count() != PHONE_LENGTH {
            return Err(DomainError::validation(
                "phone",
                format!("Phone number must be exactly {PHONE_LENGTH} digits"),
            ));
        }
        if !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::validation(
                "phone",
                "Phone number must contain only digits",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Phone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl PartialEq<str> for Phone {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

// ── Birthday ─────────────────────────────────────────────────────────────────

/// A birthday in `DD.MM.YYYY` form.
///
/// Keeps the text it was built from so that rendering gives back exactly
/// what the user typed, alongside the parsed calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let raw = value.into();
        let date = NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT).map_err(|_| {
            DomainError::validation("birthday", "Invalid date format. Use DD.MM.YYYY")
        })?;
        Ok(Self { raw, date })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Birthday {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
