//! Unified error handling for addrbook core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for addrbook core operations.
///
/// Displays as the wrapped error's message, unprefixed: the assistant prints
/// these straight back to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Errors from the domain layer (contact rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (bad use case requests).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl BookError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}

/// Convenient result type alias.
pub type BookResult<T> = Result<T, BookError>;
