//! Shared helpers for integration tests.

#![allow(dead_code)]

use address_book_bot::{AddressBook, Config, FixedClock, Record};
use chrono::NaiveDate;
use std::io::Cursor;

/// Build a date, panicking on an impossible one.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// A record with the given phones and optional birthday.
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).expect("valid name");
    for phone in phones {
        record.add_phone(phone).expect("valid phone");
    }
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).expect("valid birthday");
    }
    record
}

/// Config with an empty prompt so transcripts contain only replies.
pub fn quiet_config() -> Config {
    Config {
        prompt: String::new(),
        ..Config::default()
    }
}

/// Run `script` as a session against `book` on `today` and return stdout lines.
pub fn run_session_with(book: &mut AddressBook, config: &Config, today: NaiveDate, script: &str) -> Vec<String> {
    run_raw_session(book, config, today, script.as_bytes())
}

/// Like [`run_session`], but the script may contain bytes that are not UTF-8.
pub fn run_session_bytes(today: NaiveDate, script: &[u8]) -> Vec<String> {
    let mut book = AddressBook::new();
    run_raw_session(&mut book, &quiet_config(), today, script)
}

fn run_raw_session(book: &mut AddressBook, config: &Config, today: NaiveDate, script: &[u8]) -> Vec<String> {
    let mut output = Vec::new();
    address_book_bot::repl::run(
        book,
        config,
        &FixedClock(today),
        Cursor::new(script),
        &mut output,
    )
    .expect("in-memory session should not fail");

    String::from_utf8(output)
        .expect("output is UTF-8")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Run `script` against a fresh book with the quiet config.
pub fn run_session(today: NaiveDate, script: &str) -> Vec<String> {
    let mut book = AddressBook::new();
    run_session_with(&mut book, &quiet_config(), today, script)
}
