//! Clock adapters.

pub mod fixed;
pub mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;
