//! Data models for the address book.
//!
//! The book owns records and records own their fields; nothing else holds
//! a reference to a record.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use record::Record;
