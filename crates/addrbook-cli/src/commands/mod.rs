//! The assistant's command set.
//!
//! A line typed at the prompt is split on whitespace: the first word picks a
//! [`Command`] (case-insensitively), the rest are its arguments. Handlers
//! live in the submodules and return a [`Reply`]; nothing here writes to the
//! terminal.

use std::fmt;
use std::str::FromStr;

use addrbook_core::application::ContactService;
use tracing::{debug, instrument};

use crate::{
    cli::OutputFormat,
    error::{CliError, CliResult},
};

pub mod birthdays;
pub mod contacts;

/// What the REPL should do after a line.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Print a line of text.
    Message(String),
    /// Print a JSON document.
    Json(serde_json::Value),
    /// Print a farewell and stop reading input.
    Exit(String),
    /// Nothing to print.
    Silent,
}

impl Reply {
    pub(crate) fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }
}

/// A known command word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    RemovePhone,
    Exit,
}

impl Command {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::All => "all",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::Delete => "delete",
            Self::RemovePhone => "remove-phone",
            Self::Exit => "exit",
        }
    }

    /// Usage line shown when arguments are missing.
    pub const fn usage(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add <name> <phone>",
            Self::Change => "change <name> <old-phone> <new-phone>",
            Self::Phone => "phone <name>",
            Self::All => "all",
            Self::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Self::ShowBirthday => "show-birthday <name>",
            Self::Birthdays => "birthdays [days]",
            Self::Delete => "delete <name>",
            Self::RemovePhone => "remove-phone <name> <phone>",
            Self::Exit => "exit",
        }
    }

    pub(crate) fn missing_argument(self) -> CliError {
        CliError::MissingArgument {
            command: self.as_str(),
            usage: self.usage(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Self::Hello),
            "add" => Ok(Self::Add),
            "change" => Ok(Self::Change),
            "phone" => Ok(Self::Phone),
            "all" => Ok(Self::All),
            "add-birthday" => Ok(Self::AddBirthday),
            "show-birthday" => Ok(Self::ShowBirthday),
            "birthdays" => Ok(Self::Birthdays),
            "delete" => Ok(Self::Delete),
            "remove-phone" => Ok(Self::RemovePhone),
            "close" | "exit" => Ok(Self::Exit),
            other => Err(CliError::UnknownCommand {
                command: other.to_string(),
            }),
        }
    }
}

/// Split a line into its command word and arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut words = line.split_whitespace();
    let command = words.next()?;
    Some((command, words.collect()))
}

/// Settings the handlers need besides the contacts themselves.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Look-ahead for `birthdays` without an argument.
    pub window_days: u32,
    /// Whether `all` and `birthdays` answer in JSON.
    pub format: OutputFormat,
    /// Reply to `close` / `exit`.
    pub farewell: String,
}

/// One assistant session: the contact service plus its settings.
pub struct Session {
    service: ContactService,
    settings: SessionSettings,
}

impl Session {
    pub fn new(service: ContactService, settings: SessionSettings) -> Self {
        Self { service, settings }
    }

    pub fn service(&self) -> &ContactService {
        &self.service
    }

    /// Parse and run one line of input.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> CliResult<Reply> {
        let Some((word, args)) = parse_input(line) else {
            return Ok(Reply::Silent);
        };
        let command: Command = word.parse()?;
        debug!(%command, args = args.len(), "Dispatching");
        self.dispatch(command, &args)
    }

    fn dispatch(&mut self, command: Command, args: &[&str]) -> CliResult<Reply> {
        let service = &mut self.service;
        let settings = &self.settings;
        match command {
            Command::Hello => Ok(Reply::message("How can I help you?")),
            Command::Exit => Ok(Reply::Exit(settings.farewell.clone())),
            Command::Add => contacts::add(service, args),
            Command::Change => contacts::change(service, args),
            Command::Phone => contacts::phone(service, args),
            Command::All => contacts::all(service, settings.format),
            Command::Delete => contacts::delete(service, args),
            Command::RemovePhone => contacts::remove_phone(service, args),
            Command::AddBirthday => birthdays::add_birthday(service, args),
            Command::ShowBirthday => birthdays::show_birthday(service, args),
            Command::Birthdays => birthdays::upcoming(service, args, settings),
        }
    }
}
