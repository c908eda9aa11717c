//! Address Book Bot - an interactive command-line contact manager.
//!
//! Contacts live in memory for the lifetime of a session. Each contact has a
//! name, any number of ten-digit phone numbers, and an optional birthday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: `Record` and the name-keyed `AddressBook`
//! - **clock**: Reference date for birthday queries
//! - **repl**: Command parsing, handlers, and the interactive loop
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use domain::{BirthdayDate, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError};
pub use models::{AddressBook, Record, UpcomingBirthday};
