// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for addrbook.
//!
//! This module contains the contact model and the birthday rules. It never
//! reads the clock or the terminal: "today" is always passed in by the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or console access
//! - **Few crates**: std, thiserror, chrono for dates, serde for DTOs
//! - **Validated values**: fields reject bad input at construction
//!
// Public API - what the world sees
pub mod calendar;
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    address_book::{AddressBook, CONGRATULATION_DATE_FORMAT, DEFAULT_WINDOW_DAYS, UpcomingBirthday},
    record::Record,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Birthday, Name, Phone};
