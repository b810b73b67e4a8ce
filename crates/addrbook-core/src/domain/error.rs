// ============================================================================
// domain/error.rs - CONTACT DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the REPL reports them and keeps going)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// A field value was rejected at construction time.
    ///
    /// Displays the bare reason; the field name is kept for logging.
    #[error("{reason}")]
    Validation { field: &'static str, reason: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Contact not found: {name}")]
    ContactNotFound { name: String },

    #[error("Phone not found: {phone}")]
    PhoneNotFound { phone: String },
}

impl DomainError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation { field: "name", .. } => {
                vec!["Names need at least two characters".into()]
            }
            Self::Validation { field: "phone", .. } => {
                vec!["Phone numbers are exactly 10 digits, e.g. 0501234567".into()]
            }
            Self::Validation { field: "birthday", .. } => {
                vec!["Birthdays use the DD.MM.YYYY format, e.g. 24.08.1991".into()]
            }
            Self::Validation { .. } => vec!["Check the value and try again".into()],
            Self::ContactNotFound { name } => vec![
                format!("No contact is saved under '{name}'"),
                "Try: all".into(),
            ],
            Self::PhoneNotFound { phone } => vec![
                format!("'{phone}' is not one of this contact's phones"),
                "Try: phone <name>".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. } => ErrorCategory::Validation,
            Self::ContactNotFound { .. } | Self::PhoneNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
