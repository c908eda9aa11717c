//! BirthdayDate value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Text format birthdays are entered and displayed in.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono's `%Y` takes any width and a sign, so the shape is checked first.
static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A calendar date parsed from `DD.MM.YYYY`.
///
/// The value is always a real calendar date; it is kept as a
/// [`NaiveDate`] and rendered back in the same `DD.MM.YYYY` form.
///
/// # Example
///
/// ```
/// use address_book_bot::domain::BirthdayDate;
///
/// let birthday = BirthdayDate::parse("15.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.06.1990");
/// assert!(BirthdayDate::parse("31.02.1990").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthdayDate(NaiveDate);

impl BirthdayDate {
    /// Parse a birthday in `DD.MM.YYYY` form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text has the wrong
    /// shape (the year must be exactly four digits) or names an impossible date.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_REGEX.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The next anniversary on or after `reference`.
    ///
    /// The birthday's month and day are moved into the reference year; if that
    /// lands strictly before `reference` the following year is used instead.
    /// A 29 February birthday falls on 1 March in non-leap years.
    ///
    /// Returns `None` only when the anniversary would lie past the end of the
    /// representable calendar.
    pub fn next_occurrence(&self, reference: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.anniversary_in(reference.year())?;
        if this_year < reference {
            self.anniversary_in(reference.year() + 1)
        } else {
            Some(this_year)
        }
    }

    /// Whole days from `reference` until the next anniversary (0 when it is today).
    pub fn days_until_next(&self, reference: NaiveDate) -> Option<i64> {
        self.next_occurrence(reference)
            .map(|next| (next - reference).num_days())
    }

    fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        self.0
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }
}

impl Serialize for BirthdayDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BirthdayDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BirthdayDate::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_birthday_parse_and_render() {
        for raw in ["15.06.1990", "01.01.2000", "29.02.2024", "31.12.1999"] {
            let birthday = BirthdayDate::parse(raw).unwrap();
            assert_eq!(birthday.to_string(), raw);
        }
    }

    #[test]
    fn test_birthday_rejects_bad_input() {
        assert!(BirthdayDate::parse("").is_err());
        assert!(BirthdayDate::parse("1990-06-15").is_err());
        assert!(BirthdayDate::parse("15/06/1990").is_err());
        assert!(BirthdayDate::parse("32.01.1990").is_err());
        assert!(BirthdayDate::parse("29.02.2023").is_err());
        assert!(BirthdayDate::parse("15.13.1990").is_err());
        assert!(BirthdayDate::parse("15.06.1990 extra").is_err());
    }

    #[test]
    fn test_birthday_requires_four_digit_unsigned_year() {
        for raw in ["15.06.90", "15.06.990", "15.06.-1990", "15.06.+12345", "15.06.19900"] {
            assert_eq!(
                BirthdayDate::parse(raw),
                Err(ValidationError::InvalidBirthday(raw.to_string())),
                "{:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_birthday_accepts_unpadded_day_and_month() {
        let birthday = BirthdayDate::parse("1.2.2000").unwrap();
        assert_eq!(birthday.to_string(), "01.02.2000");
    }

    #[test]
    fn test_birthday_error_variant() {
        assert_eq!(
            BirthdayDate::parse("nope"),
            Err(ValidationError::InvalidBirthday("nope".to_string()))
        );
    }

    #[test]
    fn test_days_until_next_same_year() {
        let birthday = BirthdayDate::parse("15.06.1990").unwrap();
        assert_eq!(birthday.days_until_next(ymd(2024, 6, 10)), Some(5));
    }

    #[test]
    fn test_days_until_next_rolls_over() {
        let birthday = BirthdayDate::parse("15.06.1990").unwrap();
        assert_eq!(birthday.days_until_next(ymd(2024, 6, 20)), Some(360));
        assert_eq!(
            birthday.next_occurrence(ymd(2024, 6, 20)),
            Some(ymd(2025, 6, 15))
        );
    }

    #[test]
    fn test_days_until_next_today_is_zero() {
        let birthday = BirthdayDate::parse("15.06.1990").unwrap();
        assert_eq!(birthday.days_until_next(ymd(2024, 6, 15)), Some(0));
    }

    #[test]
    fn test_leap_day_birthday_in_non_leap_year() {
        let birthday = BirthdayDate::parse("29.02.2000").unwrap();
        assert_eq!(
            birthday.next_occurrence(ymd(2025, 2, 20)),
            Some(ymd(2025, 3, 1))
        );
        assert_eq!(birthday.days_until_next(ymd(2025, 2, 28)), Some(1));
        assert_eq!(birthday.days_until_next(ymd(2025, 3, 1)), Some(0));
        // Past 1 March 2027, so the next one is the real 29 February 2028.
        assert_eq!(
            birthday.next_occurrence(ymd(2027, 3, 2)),
            Some(ymd(2028, 2, 29))
        );
    }

    #[test]
    fn test_leap_day_birthday_in_leap_year() {
        let birthday = BirthdayDate::parse("29.02.2000").unwrap();
        assert_eq!(birthday.days_until_next(ymd(2024, 2, 22)), Some(7));
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = BirthdayDate::parse("05.11.1985").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"05.11.1985\"");

        let back: BirthdayDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<BirthdayDate, _> = serde_json::from_str("\"1985-11-05\"");
        assert!(result.is_err());
    }
}
