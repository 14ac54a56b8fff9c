//! Data models for the address book.
//!
//! This module contains the record structure holding one person's name,
//! phone numbers and birthday.

pub mod record;

pub use record::{PhoneAddOutcome, Record};
