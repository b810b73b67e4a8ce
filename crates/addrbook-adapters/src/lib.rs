//! Infrastructure adapters for addrbook.
//!
//! This crate implements the ports defined in `addrbook-core::application::ports`.
//! It contains all access to the outside world the core needs.

pub mod clock;

// Re-export commonly used adapters
pub use clock::{FixedClock, SystemClock};
