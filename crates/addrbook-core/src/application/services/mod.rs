//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! the assistant's commands, such as "add a contact" or "list upcoming
//! birthdays".

pub mod contact_service;

pub use contact_service::{AddOutcome, ContactInfo, ContactService, parse_window};
