//! Record model representing one person in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use serde::Serialize;
use std::fmt;

/// Result of [`Record::add_phone`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneAddOutcome {
    /// Numbers appended to the record, in order
    pub added: Vec<PhoneNumber>,

    /// Numbers that were already present and left alone
    pub skipped: Vec<PhoneNumber>,
}

/// A contact: name, ordered unique phone numbers and an optional birthday.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Record {
    name: ContactName,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::with_name(ContactName::new(name)?))
    }

    /// Create a record from an already validated name.
    pub fn with_name(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Whether the record holds `phone`.
    pub fn has_phone(&self, phone: &str) -> bool {
        self.phones.iter().any(|p| p == phone)
    }

    /// Append phone numbers, skipping ones already on the record.
    ///
    /// Every candidate is validated before anything is appended, so an
    /// invalid number leaves the record untouched.
    pub fn add_phone<I, S>(&mut self, numbers: I) -> Result<PhoneAddOutcome, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let candidates = numbers
            .into_iter()
            .map(PhoneNumber::new)
            .collect::<Result<Vec<_>, _>>()?;

        let mut outcome = PhoneAddOutcome::default();
        for phone in candidates {
            if self.phones.contains(&phone) {
                tracing::warn!(
                    contact = %self.name,
                    phone = %phone,
                    "Phone number already exists, skipping"
                );
                outcome.skipped.push(phone);
            } else {
                tracing::debug!(contact = %self.name, phone = %phone, "Phone number added");
                self.phones.push(phone.clone());
                outcome.added.push(phone);
            }
        }

        Ok(outcome)
    }

    /// Remove every phone equal to `phone`. Returns whether one was removed.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        let before = self.phones.len();
        self.phones.retain(|p| p != phone);
        let removed = self.phones.len() != before;
        if removed {
            tracing::debug!(contact = %self.name, phone, "Phone number removed");
        }
        removed
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// Returns `Ok(false)` without validating `new` when `old` is not on the
    /// record. If `new` is already on the record, the `old` entry is dropped
    /// so numbers stay unique.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let Some(index) = self.phones.iter().position(|p| p == old) else {
            return Ok(false);
        };

        let replacement = PhoneNumber::new(new)?;

        if old != new && self.phones.contains(&replacement) {
            self.phones.remove(index);
        } else {
            self.phones[index] = replacement;
        }

        tracing::debug!(contact = %self.name, old, new, "Phone number edited");
        Ok(true)
    }

    /// Set the birthday. Fails if one is already set.
    pub fn add_birthday(&mut self, date: &str) -> BookResult<()> {
        if self.birthday.is_some() {
            return Err(BookError::DuplicateBirthday(self.name.to_string()));
        }

        self.birthday = Some(Birthday::parse(date)?);
        tracing::debug!(contact = %self.name, birthday = date, "Birthday set");
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
