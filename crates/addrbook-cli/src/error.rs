//! Error handling for the addrbook CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping
//!
//! Most errors never leave the REPL: they are printed and the loop carries
//! on. Only configuration and I/O failures reach `main`.

use std::error::Error as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use addrbook_core::error::BookError;

// Re-export so callers only need `use crate::error::*`.
pub use addrbook_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A command was given fewer arguments than it needs.
    #[error("Enter correct information.")]
    MissingArgument {
        command: &'static str,
        usage: &'static str,
    },

    /// The first word of the line is not a known command.
    #[error("Invalid command.")]
    UnknownCommand { command: String },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `addrbook-core`.
    #[error(transparent)]
    Core(#[from] BookError),

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON output could not be produced.
    #[error("Failed to serialise output")]
    Serialization(#[from] serde_json::Error),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingArgument { command, usage } => vec![
                format!("'{command}' needs more arguments"),
                format!("Usage: {usage}"),
            ],

            Self::UnknownCommand { command } => vec![
                format!("'{command}' is not a command"),
                "Commands: hello, add, change, phone, all, add-birthday,".into(),
                "  show-birthday, birthdays, delete, remove-phone, close, exit".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file at ~/.config/addrbook/config.toml".into(),
                "Or pass another file with --config".into(),
            ],

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check that standard input and output are usable".into(),
            ],

            Self::Serialization(_) => vec!["Retry with --output-format plain".into()],
        }
    }

    /// Get the error category for log levels and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingArgument { .. } => ErrorCategory::UserError,
            Self::UnknownCommand { .. } => ErrorCategory::UserError,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Serialization(_) => ErrorCategory::Internal,
        }
    }

    /// Exit code for an error that ends the process: 4 for configuration,
    /// 1 otherwise. Prompt errors are answered in the loop and never get here.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Configuration => 4,
            _ => 1,
        }
    }

    /// One-line message for the REPL.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingArgument { usage, .. } => format!("{self} Usage: {usage}"),
            _ => self.to_string(),
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    ///
    /// User and not-found errors are routine at the prompt, so they log at
    /// DEBUG and stay out of the default WARN output.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::debug!("User error: {}", self),
            ErrorCategory::NotFound => tracing::debug!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use addrbook_core::domain::DomainError;
    use std::io;

    fn not_found() -> CliError {
        CliError::Core(BookError::Domain(DomainError::ContactNotFound {
            name: "John".into(),
        }))
    }

    // ── messages ──────────────────────────────────────────────────────────

    #[test]
    fn missing_argument_message_includes_usage() {
        let err = CliError::MissingArgument {
            command: "add",
            usage: "add <name> <phone>",
        };
        assert_eq!(
            err.user_message(),
            "Enter correct information. Usage: add <name> <phone>"
        );
    }

    #[test]
    fn unknown_command_message() {
        let err = CliError::UnknownCommand {
            command: "fly".into(),
        };
        assert_eq!(err.user_message(), "Invalid command.");
        assert!(err.suggestions().iter().any(|s| s.contains("add-birthday")));
    }

    #[test]
    fn core_errors_display_unprefixed() {
        assert_eq!(not_found().user_message(), "Contact not found: John");
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let s = not_found().format_plain(false);
        assert!(s.contains("Error: Contact not found: John"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = CliError::IoError {
            message: "reading input".into(),
            source: io::Error::other("broken pipe"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: broken pipe"));
        assert!(!s.contains("--verbose"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading input");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
