//! Contact Book - an interactive command-line assistant for managing contacts.
//!
//! Contacts live in memory for the length of a session. Each one has a
//! name, any number of ten-digit phone numbers and an optional birthday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, phone numbers and birthdays
//! - **models**: The contact record and its mutations
//! - **book**: The case-insensitive address book and upcoming-birthday report
//! - **assistant**: Command parsing, handlers and the interactive session
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod assistant;
pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use assistant::{run_session, Assistant, Command, Reply};
pub use book::{AddressBook, BirthdayReport};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::{PhoneAddOutcome, Record};
