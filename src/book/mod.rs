//! The address book and its queries.
//!
//! The book owns every record, keyed case-insensitively by name, and keeps
//! them in insertion order for listings and searches.

mod address_book;
pub mod birthdays;

pub use address_book::{AddContactOutcome, AddressBook};
pub use birthdays::{BirthdayDay, BirthdayReport, UPCOMING_WINDOW_DAYS};
