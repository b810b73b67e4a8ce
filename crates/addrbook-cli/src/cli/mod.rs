//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about flag names, help text,
//! and value enums. The assistant's own commands are typed at the prompt and
//! parsed in `crate::commands`.

use clap::Parser;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "addrbook",
    bin_name = "addrbook",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Contact book assistant with birthday reminders",
    long_about = "addrbook keeps names, phone numbers and birthdays for the \
                  length of a session and tells you whose birthday is coming up.",
    after_help = "COMMANDS (typed at the prompt):\n\
        \x20 hello | add <name> <phone> | change <name> <old> <new> | phone <name>\n\
        \x20 all | add-birthday <name> <DD.MM.YYYY> | show-birthday <name>\n\
        \x20 birthdays [days] | delete <name> | remove-phone <name> <phone>\n\
        \x20 close | exit\n\n\
        EXAMPLES:\n\
        \x20 addrbook\n\
        \x20 addrbook --days 14\n\
        \x20 printf 'add John 1234567890\\nall\\nexit\\n' | addrbook -q",
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,
}
