//! In-memory address book.

use super::birthdays::{self, BirthdayReport};
use crate::domain::ContactName;
use crate::error::{BookError, BookResult};
use crate::models::{PhoneAddOutcome, Record};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Result of [`AddressBook::add_contact`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddContactOutcome {
    /// Whether a new record was created for the name
    pub created: bool,

    /// Which numbers were appended and which were already present
    pub phones: PhoneAddOutcome,
}

/// All records, keyed by lower-cased name.
///
/// Iteration, listings and phone searches follow the order in which names
/// were first added.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Store `record` under its lower-cased name.
    ///
    /// An existing record with the same name is replaced, not merged, and
    /// returned. The replacement keeps the original's position.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().key();
        let replaced = self.records.insert(key.clone(), record);

        match &replaced {
            Some(previous) => {
                tracing::warn!(contact = %previous.name(), "Existing record replaced");
            }
            None => {
                tracing::debug!(key = %key, "Record added");
                self.order.push(key);
            }
        }

        replaced
    }

    /// Add phones to the named contact, creating the contact if needed.
    ///
    /// Nothing is stored when the name or any phone is invalid.
    pub fn add_contact<I, S>(&mut self, name: &str, phones: I) -> BookResult<AddContactOutcome>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(record) = self.find_mut(name) {
            let phones = record.add_phone(phones)?;
            return Ok(AddContactOutcome {
                created: false,
                phones,
            });
        }

        let mut record = Record::new(name)?;
        let phones = record.add_phone(phones)?;
        self.add_record(record);

        Ok(AddContactOutcome {
            created: true,
            phones,
        })
    }

    /// Case-insensitive lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(&ContactName::key_for(name))
    }

    /// Case-insensitive lookup for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(&ContactName::key_for(name))
    }

    /// Case-insensitive lookup that reports a missing contact as an error.
    pub fn get(&self, name: &str) -> BookResult<&Record> {
        self.find(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))
    }

    fn get_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.find_mut(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))
    }

    /// Remove a contact. Returns the removed record, if there was one.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let key = ContactName::key_for(name);
        let removed = self.records.remove(&key)?;
        self.order.retain(|k| k != &key);
        tracing::debug!(contact = %removed.name(), "Record deleted");
        Some(removed)
    }

    /// Remove a phone from the named contact.
    ///
    /// Returns whether the phone was on the record.
    pub fn delete_phone(&mut self, name: &str, phone: &str) -> BookResult<bool> {
        Ok(self.get_mut(name)?.remove_phone(phone))
    }

    /// Replace a phone on the named contact. See [`Record::edit_phone`].
    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> BookResult<bool> {
        Ok(self.get_mut(name)?.edit_phone(old, new)?)
    }

    /// Set the birthday of the named contact.
    pub fn add_birthday(&mut self, name: &str, date: &str) -> BookResult<()> {
        self.get_mut(name)?.add_birthday(date)
    }

    /// Every record holding `phone`, in insertion order.
    pub fn find_phone(&self, phone: &str) -> Vec<&Record> {
        self.iter().filter(|record| record.has_phone(phone)).collect()
    }

    /// Birthdays to congratulate within the week starting at `today`.
    ///
    /// See [`birthdays::upcoming`] for the scheduling rules.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> BirthdayReport {
        birthdays::upcoming(self.iter(), today)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = Box<dyn Iterator<Item = &'a Record> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
