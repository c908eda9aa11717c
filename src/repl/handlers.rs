//! Command handlers.
//!
//! Each handler takes the book explicitly, performs one command, and returns
//! the text to print. Failures come back as `CommandError`, whose `Display`
//! is the message for the user.

use super::command::Command;
use crate::clock::Clock;
use crate::config::Config;
use crate::domain::PhoneNumber;
use crate::error::{BookError, CommandError, CommandResult};
use crate::models::{AddressBook, Record};

/// Route a parsed command to its handler.
///
/// `Command::Exit` is handled by the loop itself; here it just yields the farewell.
pub fn dispatch(
    command: Command<'_>,
    book: &mut AddressBook,
    clock: &dyn Clock,
    config: &Config,
) -> CommandResult<String> {
    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add { name, phone } => add_contact(book, name, phone),
        Command::Change { name, old, new } => change_phone(book, name, old, new),
        Command::Phone { name } => show_phones(book, name),
        Command::All => show_all(book),
        Command::AddBirthday { name, birthday } => add_birthday(book, name, birthday),
        Command::ShowBirthday { name } => show_birthday(book, name),
        Command::Birthdays => upcoming_birthdays(book, clock, config.birthday_window_days),
        Command::RemovePhone { name, phone } => remove_phone(book, name, phone),
        Command::Delete { name } => delete_contact(book, name),
        Command::Exit => Ok(super::FAREWELL.to_string()),
    }
}

/// Create a contact, or append a phone if the name is already known.
pub fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok(format!("Added phone {} to existing contact {}.", phone, name));
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    tracing::info!(contact = name, "Created contact");
    Ok(format!("Created new contact {} with phone {}.", name, phone))
}

pub fn change_phone(
    book: &mut AddressBook,
    name: &str,
    old: &str,
    new: &str,
) -> CommandResult<String> {
    let record = existing_mut(book, name)?;
    record.edit_phone(old, new).map_err(|err| match err {
        BookError::NotFound { .. } => CommandError::PhoneNotFound {
            name: name.to_string(),
            phone: old.to_string(),
        },
        other => other.into(),
    })?;
    Ok(format!(
        "Changed phone {} to {} for contact {}.",
        old, new, name
    ))
}

pub fn show_phones(book: &AddressBook, name: &str) -> CommandResult<String> {
    let record = book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    let phones = record
        .phones()
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("{}'s phone numbers: {}.", name, phones))
}

pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("No contacts found.".to_string());
    }
    Ok(book.to_string())
}

pub fn add_birthday(book: &mut AddressBook, name: &str, birthday: &str) -> CommandResult<String> {
    existing_mut(book, name)?.add_birthday(birthday)?;
    Ok(format!("Birthday {} added for {}.", birthday, name))
}

pub fn show_birthday(book: &AddressBook, name: &str) -> CommandResult<String> {
    book.find(name)
        .and_then(Record::birthday)
        .map(|birthday| format!("{}'s birthday is on {}.", name, birthday))
        .ok_or_else(|| CommandError::BirthdayNotFound(name.to_string()))
}

pub fn upcoming_birthdays(
    book: &AddressBook,
    clock: &dyn Clock,
    window_days: i64,
) -> CommandResult<String> {
    let today = clock.today();
    let upcoming = book.upcoming_birthdays(today, window_days);
    tracing::debug!(%today, window_days, found = upcoming.len(), "Birthday lookup");

    if upcoming.is_empty() {
        return Ok(format!(
            "No upcoming birthdays in the next {} days.",
            window_days
        ));
    }
    Ok(upcoming
        .iter()
        .map(|entry| format!("{} has a birthday on {}.", entry.name, entry.birthday))
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn remove_phone(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
    let record = existing_mut(book, name)?;
    record.remove_phone(phone).map_err(|err| match err {
        BookError::NotFound { .. } => CommandError::PhoneNotFound {
            name: name.to_string(),
            phone: phone.to_string(),
        },
        other => other.into(),
    })?;
    Ok(format!("Removed phone {} from contact {}.", phone, name))
}

pub fn delete_contact(book: &mut AddressBook, name: &str) -> CommandResult<String> {
    book.delete(name).map_err(|err| match err {
        BookError::NotFound { .. } => CommandError::ContactNotFound(name.to_string()),
        other => other.into(),
    })?;
    tracing::info!(contact = name, "Deleted contact");
    Ok(format!("Deleted contact {}.", name))
}

fn existing_mut<'b>(book: &'b mut AddressBook, name: &str) -> CommandResult<&'b mut Record> {
    book.find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}
