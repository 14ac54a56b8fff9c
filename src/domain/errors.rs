//! Domain validation errors.

use super::phone::PhoneNumber;
use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a `DD.MM.YYYY` calendar date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number '{}': must contain exactly {} digits",
                phone,
                PhoneNumber::LENGTH
            ),
            Self::InvalidBirthday(date) => write!(
                f,
                "Invalid birthday '{}': must be a date in the format DD.MM.YYYY",
                date
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
