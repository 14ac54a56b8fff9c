//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A name, phone number or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The contact already has a birthday
    #[error("Contact '{0}' already has a birthday; only one birthday is allowed")]
    DuplicateBirthday(String),

    /// No contact with the given name
    #[error("Contact '{0}' not found")]
    NotFound(String),

    /// A command was called with the wrong arguments
    #[error("{0}")]
    Usage(String),
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

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::NotFound("Bob".to_string());
        assert_eq!(err.to_string(), "Contact 'Bob' not found");

        let err = BookError::Usage("Usage: phone <name>".to_string());
        assert_eq!(err.to_string(), "Usage: phone <name>");

        let err = ConfigError::InvalidValue {
            var: "CONTACT_BOOK_TODAY".to_string(),
            reason: "bad date".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for CONTACT_BOOK_TODAY: bad date"
        );
    }

    #[test]
    fn test_validation_error_converts() {
        let err: BookError = ValidationError::EmptyName.into();
        assert_eq!(err, BookError::Validation(ValidationError::EmptyName));
        assert_eq!(err.to_string(), "Contact name cannot be empty");
    }

    #[test]
    fn test_duplicate_birthday_mentions_contact() {
        let err = BookError::DuplicateBirthday("Al".to_string());
        assert!(err.to_string().contains("'Al'"));
    }
}
