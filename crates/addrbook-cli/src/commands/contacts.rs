//! Handlers for the contact commands: `add`, `change`, `phone`, `all`,
//! `delete` and `remove-phone`.

use addrbook_core::application::{AddOutcome, ContactService};

use super::{Command, Reply};
use crate::{cli::OutputFormat, error::CliResult};

pub fn add(service: &mut ContactService, args: &[&str]) -> CliResult<Reply> {
    let &[name, phone, ..] = args else {
        return Err(Command::Add.missing_argument());
    };
    let reply = match service.add_contact(name, phone)? {
        AddOutcome::Added => "Contact added.",
        AddOutcome::Updated => "Contact updated.",
    };
    Ok(Reply::message(reply))
}

pub fn change(service: &mut ContactService, args: &[&str]) -> CliResult<Reply> {
    let &[name, old, new, ..] = args else {
        return Err(Command::Change.missing_argument());
    };
    service.change_phone(name, old, new)?;
    Ok(Reply::message("Contact updated."))
}

pub fn phone(service: &ContactService, args: &[&str]) -> CliResult<Reply> {
    let &[name, ..] = args else {
        return Err(Command::Phone.missing_argument());
    };
    Ok(Reply::Message(service.contact(name)?.phone_list()))
}

pub fn all(service: &ContactService, format: OutputFormat) -> CliResult<Reply> {
    if format == OutputFormat::Json {
        return Ok(Reply::Json(serde_json::to_value(service.contacts())?));
    }
    if service.book().is_empty() {
        return Ok(Reply::message("No contacts saved."));
    }
    Ok(Reply::Message(service.book().to_string()))
}

pub fn delete(service: &mut ContactService, args: &[&str]) -> CliResult<Reply> {
    let &[name, ..] = args else {
        return Err(Command::Delete.missing_argument());
    };
    service.delete_contact(name)?;
    Ok(Reply::message("Contact deleted."))
}

pub fn remove_phone(service: &mut ContactService, args: &[&str]) -> CliResult<Reply> {
    let &[name, phone, ..] = args else {
        return Err(Command::RemovePhone.missing_argument());
    };
    let reply = if service.remove_phone(name, phone)? {
        "Phone removed."
    } else {
        "No such phone."
    };
    Ok(Reply::message(reply))
}
