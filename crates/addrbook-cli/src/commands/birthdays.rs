//! Handlers for `add-birthday`, `show-birthday` and `birthdays`.

use addrbook_core::application::{ContactService, parse_window};

use super::{Command, Reply, SessionSettings};
use crate::{cli::OutputFormat, error::CliResult};

pub fn add_birthday(service: &mut ContactService, args: &[&str]) -> CliResult<Reply> {
    let &[name, date, ..] = args else {
        return Err(Command::AddBirthday.missing_argument());
    };
    service.add_birthday(name, date)?;
    Ok(Reply::message("Birthday added."))
}

pub fn show_birthday(service: &ContactService, args: &[&str]) -> CliResult<Reply> {
    let &[name, ..] = args else {
        return Err(Command::ShowBirthday.missing_argument());
    };
    let text = service
        .birthday(name)?
        .map_or_else(|| "none".to_string(), ToString::to_string);
    Ok(Reply::Message(text))
}

/// `birthdays [days]`: the optional argument overrides the configured window.
pub fn upcoming(
    service: &ContactService,
    args: &[&str],
    settings: &SessionSettings,
) -> CliResult<Reply> {
    let days = match args.first() {
        Some(raw) => parse_window(raw)?,
        None => settings.window_days,
    };
    let upcoming = service.upcoming_birthdays(days);

    if settings.format == OutputFormat::Json {
        return Ok(Reply::Json(serde_json::to_value(&upcoming)?));
    }
    if upcoming.is_empty() {
        return Ok(Reply::message("No upcoming birthdays."));
    }
    let lines: Vec<String> = upcoming.iter().map(ToString::to_string).collect();
    Ok(Reply::Message(lines.join("\n")))
}
