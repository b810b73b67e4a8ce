//! Output management and formatting.
//!
//! Replies and errors always go to stdout, one per line; the banner and the
//! prompt are chrome and disappear under `--quiet`.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    verbose: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            verbose: args.verbose > 0,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// A reply to a command. Never suppressed.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// A value serialised as pretty JSON.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), crate::error::CliError> {
        let rendered = serde_json::to_string_pretty(value)?;
        self.term.write_line(&rendered)?;
        Ok(())
    }

    /// Error line, red with a `✗` marker when colour is on. *Not* suppressed
    /// in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            msg.to_owned()
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Indented suggestion under an error line, dimmed when colour is on.
    pub fn hint(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("  {msg}")
        } else {
            format!("  {}", msg.dimmed())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan banner line; suppressed in quiet mode.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Input prompt, written without a trailing newline; suppressed in quiet
    /// mode.
    pub fn prompt(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.no_color {
            self.term.write_str(text)?;
        } else {
            self.term.write_str(&text.bold().to_string())?;
        }
        self.term.flush()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if the banner and prompt are hidden.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// `true` if errors at the prompt carry their suggestions.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
