//! Error types for the address book bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by `Record` and `AddressBook` operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Entity not found
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl BookError {
    pub(crate) fn contact_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contact",
            identifier: name.into(),
        }
    }

    pub(crate) fn phone_not_found(phone: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Phone number",
            identifier: phone.into(),
        }
    }
}

/// Errors surfaced by command handlers.
///
/// The `Display` output of every variant is the exact line shown to the user.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The first word of the line is not a known command
    #[error("Invalid command.")]
    InvalidCommand(String),

    /// Not enough arguments for the command
    #[error("{0}")]
    Usage(&'static str),

    /// No contact is filed under the given name
    #[error("No contact found with name {0}.")]
    ContactNotFound(String),

    /// The contact exists but does not have the given phone
    #[error("Phone number {phone} not found for contact {name}.")]
    PhoneNotFound { name: String, phone: String },

    /// The contact is missing or has no birthday set
    #[error("No birthday found for {0}.")]
    BirthdayNotFound(String),

    /// Input failed field validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Any other book error
    #[error(transparent)]
    Book(BookError),
}

impl From<BookError> for CommandError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::Validation(e) => CommandError::Validation(e),
            other => CommandError::Book(other),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::contact_not_found("Alice");
        assert_eq!(err.to_string(), "Contact not found: Alice");

        let err = BookError::phone_not_found("0123456789");
        assert_eq!(err.to_string(), "Phone number not found: 0123456789");

        let err = CommandError::ContactNotFound("Bob".to_string());
        assert_eq!(err.to_string(), "No contact found with name Bob.");

        let err = ConfigError::InvalidValue {
            var: "BOT_BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for BOT_BIRTHDAY_WINDOW_DAYS: Must be a number"
        );
    }

    #[test]
    fn test_validation_passes_through_unchanged() {
        let err: BookError = ValidationError::InvalidPhone("1".to_string()).into();
        assert_eq!(err.to_string(), "Phone number must be exactly 10 digits.");

        let err: CommandError = err.into();
        assert!(matches!(err, CommandError::Validation(_)));
        assert_eq!(err.to_string(), "Phone number must be exactly 10 digits.");
    }

    #[test]
    fn test_phone_not_found_message() {
        let err = CommandError::PhoneNotFound {
            name: "Alice".to_string(),
            phone: "1111111111".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Phone number 1111111111 not found for contact Alice."
        );
    }
}
