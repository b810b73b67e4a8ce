//! Application layer for addrbook.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ContactService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All contact rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    AddOutcome,
    ContactInfo, // DTO for contact listings
    ContactService,
    parse_window,
};

// Re-export port traits (for adapter implementation)
pub use ports::Clock;

pub use error::ApplicationError;
