//! addrbook Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the addrbook
//! contact assistant, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          addrbook-cli (REPL)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ContactService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (Driven: Clock)              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    addrbook-adapters (Infrastructure)   │
//! │        (SystemClock, FixedClock)        │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Name, Phone, Birthday, Record, Book)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use addrbook_core::prelude::*;
//! use chrono::NaiveDate;
//!
//! struct Today;
//!
//! impl Clock for Today {
//!     fn today(&self) -> NaiveDate {
//!         NaiveDate::from_ymd_opt(2024, 8, 20).unwrap()
//!     }
//! }
//!
//! let mut service = ContactService::new(Box::new(Today));
//! service.add_contact("John", "1234567890")?;
//! service.add_birthday("John", "24.08.1991")?;
//!
//! let upcoming = service.upcoming_birthdays(DEFAULT_WINDOW_DAYS);
//! assert_eq!(upcoming[0].to_string(), "John: 2024.08.26");
//! # Ok::<(), BookError>(())
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{AddOutcome, Clock, ContactInfo, ContactService};
    pub use crate::domain::{
        AddressBook, Birthday, DEFAULT_WINDOW_DAYS, Name, Phone, Record, UpcomingBirthday,
    };
    pub use crate::error::{BookError, BookResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
