//! Record model: one contact's name, phones, and birthday.

use crate::domain::{BirthdayDate, ContactName, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the address book.
///
/// The name is fixed at creation. Phones keep insertion order and may
/// repeat; the birthday can be set and overwritten but not cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<BirthdayDate>,
}

impl Record {
    /// Create an empty record for `name`.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&BirthdayDate> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone. The record is unchanged on failure.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        tracing::debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `raw`.
    pub fn remove_phone(&mut self, raw: &str) -> BookResult<()> {
        let index = self
            .position_of(raw)
            .ok_or_else(|| BookError::phone_not_found(raw))?;
        self.phones.remove(index);
        tracing::debug!(contact = %self.name, phone = raw, "Removed phone");
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// Fails with `NotFound` if `old` is absent, or with `Validation` if
    /// `new` is malformed, in which case the phone keeps its old value.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self
            .position_of(old)
            .ok_or_else(|| BookError::phone_not_found(old))?;
        self.phones[index].replace(new)?;
        tracing::debug!(contact = %self.name, old, new, "Edited phone");
        Ok(())
    }

    /// Parse and set the birthday, overwriting any previous one.
    pub fn add_birthday(&mut self, raw: &str) -> BookResult<()> {
        let birthday = BirthdayDate::parse(raw)?;
        tracing::debug!(contact = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Days from `reference` until the next birthday, or `None` if no birthday is set.
    pub fn days_to_birthday(&self, reference: NaiveDate) -> Option<i64> {
        self.birthday
            .as_ref()
            .and_then(|birthday| birthday.days_until_next(reference))
    }

    fn position_of(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == raw)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}
