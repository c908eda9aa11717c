//! Parsing of input lines into typed commands.

use crate::error::{CommandError, CommandResult};

const ADD_USAGE: &str = "Please provide both name and phone number.";
const CHANGE_USAGE: &str = "Please provide name, old phone, and new phone.";
const NAME_USAGE: &str = "Please provide a name.";
const ADD_BIRTHDAY_USAGE: &str = "Please provide both name and birthday.";
const REMOVE_PHONE_USAGE: &str = "Please provide both name and phone number to remove.";

/// A parsed command line.
///
/// Arguments borrow from the input line. Extra trailing arguments are
/// ignored; missing ones are rejected at parse time with a usage message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Hello,
    Add { name: &'a str, phone: &'a str },
    Change { name: &'a str, old: &'a str, new: &'a str },
    Phone { name: &'a str },
    All,
    AddBirthday { name: &'a str, birthday: &'a str },
    ShowBirthday { name: &'a str },
    Birthdays,
    RemovePhone { name: &'a str, phone: &'a str },
    Delete { name: &'a str },
    Exit,
}

impl<'a> Command<'a> {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for a blank line. The command word is case-sensitive.
    pub fn parse(line: &'a str) -> CommandResult<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&'a str> = tokens.collect();

        let command = match word {
            "hello" => Command::Hello,
            "add" => {
                let [name, phone] = take::<2>(&args, ADD_USAGE)?;
                Command::Add { name, phone }
            }
            "change" => {
                let [name, old, new] = take::<3>(&args, CHANGE_USAGE)?;
                Command::Change { name, old, new }
            }
            "phone" => {
                let [name] = take::<1>(&args, NAME_USAGE)?;
                Command::Phone { name }
            }
            "all" => Command::All,
            "add-birthday" => {
                let [name, birthday] = take::<2>(&args, ADD_BIRTHDAY_USAGE)?;
                Command::AddBirthday { name, birthday }
            }
            "show-birthday" => {
                let [name] = take::<1>(&args, NAME_USAGE)?;
                Command::ShowBirthday { name }
            }
            "birthdays" => Command::Birthdays,
            "remove-phone" => {
                let [name, phone] = take::<2>(&args, REMOVE_PHONE_USAGE)?;
                Command::RemovePhone { name, phone }
            }
            "delete" => {
                let [name] = take::<1>(&args, NAME_USAGE)?;
                Command::Delete { name }
            }
            "close" | "exit" => Command::Exit,
            other => return Err(CommandError::InvalidCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// First `N` arguments, or a usage error if there are fewer.
fn take<'a, const N: usize>(
    args: &[&'a str],
    usage: &'static str,
) -> CommandResult<[&'a str; N]> {
    args.get(..N)
        .and_then(|head| <[&'a str; N]>::try_from(head).ok())
        .ok_or(CommandError::Usage(usage))
}
