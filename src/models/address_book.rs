//! AddressBook: the in-memory store of all records, keyed by contact name.

use super::record::Record;
use crate::error::{BookError, BookResult};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Default lookahead for [`AddressBook::upcoming_birthdays`], in days.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// A contact whose birthday falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Birthday rendered as `DD.MM.YYYY`
    pub birthday: String,
}

/// Name-keyed collection of records.
///
/// Iteration follows insertion order. Overwriting an existing name keeps
/// that name's original position.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record already there.
    ///
    /// Phones are not merged: the previous record is dropped as a whole.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_some() {
            tracing::debug!(contact = %key, "Replaced existing record");
        } else {
            tracing::debug!(contact = %key, "Added record");
            self.order.push(key);
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record filed under `name`.
    pub fn delete(&mut self, name: &str) -> BookResult<()> {
        if self.records.remove(name).is_none() {
            return Err(BookError::contact_not_found(name));
        }
        self.order.retain(|key| key != name);
        tracing::debug!(contact = name, "Deleted record");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Contacts whose next birthday is at most `window_days` days after `reference`.
    ///
    /// Results follow insertion order, not proximity.
    pub fn upcoming_birthdays(
        &self,
        reference: NaiveDate,
        window_days: i64,
    ) -> Vec<UpcomingBirthday> {
        self.records()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let days = record.days_to_birthday(reference)?;
                (days <= window_days).then(|| UpcomingBirthday {
                    name: record.name().to_string(),
                    birthday: birthday.to_string(),
                })
            })
            .collect()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
