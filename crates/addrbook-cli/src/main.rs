//! # addrbook
//!
//! Interactive contact book with birthday reminders.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`] and the contact service.
//! 5. Run the REPL on standard input.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Session ended normally  |
//! |  1   | Internal / system error |
//! |  2   | Invalid command line    |
//! |  4   | Configuration error     |

use std::io;
use std::process::ExitCode;

use addrbook_adapters::SystemClock;
use addrbook_core::application::ContactService;
use clap::Parser;
use tracing::{debug, info};

use crate::{
    cli::Cli,
    commands::{Session, SessionSettings},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod repl;

fn main() -> ExitCode {
    // Silently ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    match run(cli) {
        Ok(()) => {
            info!("Session ended");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Steps 3 to 5: config, wiring, REPL.
fn run(cli: Cli) -> CliResult<()> {
    let config = AppConfig::load(cli.global.config.as_ref())?;
    let output = OutputManager::new(&cli.global, &config);

    let settings = SessionSettings {
        window_days: cli.global.days.unwrap_or(config.birthdays.window_days),
        format: output.format(),
        farewell: config.assistant.farewell.clone(),
    };
    debug!(
        window_days = settings.window_days,
        format = ?settings.format,
        color = output.supports_color(),
        quiet = output.is_quiet(),
        "Session settings"
    );

    let service = ContactService::new(Box::new(SystemClock::new()));
    let mut session = Session::new(service, settings);

    repl::run(&mut session, io::stdin().lock(), &output, &config.assistant)
}

/// Translate a `CliError` into a message on stderr and an exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    let msg = if io::IsTerminal::is_terminal(&io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
