//! Application layer errors.
//!
//! These errors represent bad requests to a use case, not broken contact
//! rules. Contact rule violations are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The birthday look-ahead was not a non-negative whole number of days.
    #[error("Invalid number of days: {value}")]
    InvalidWindow { value: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidWindow { .. } => vec![
                "The window is a whole number of days, e.g. 7".into(),
                "Try: birthdays 14".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidWindow { .. } => ErrorCategory::Validation,
        }
    }
}
