//! Command handlers.
//!
//! Each handler runs one command against the address book and renders a
//! human-readable reply. Errors are turned into a single `Error: ...` line
//! by [`Assistant::respond`], so a failed command never ends the session.

use super::command::{Command, USAGE};
use crate::book::{AddressBook, UPCOMING_WINDOW_DAYS};
use crate::config::Config;
use crate::domain::PhoneNumber;
use crate::error::{BookError, BookResult};
use chrono::NaiveDate;

/// What the session should do after a line was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text (if any) and read the next line
    Continue(Option<String>),

    /// Print the text and end the session
    Exit(String),
}

/// The assistant owns the address book for the length of a session.
#[derive(Debug, Default)]
pub struct Assistant {
    book: AddressBook,
    today: Option<NaiveDate>,
}

impl Assistant {
    /// Create an assistant with an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an assistant with settings from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            book: AddressBook::new(),
            today: config.today,
        }
    }

    /// Use a fixed date as "today" for birthday queries.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Date used by the `birthdays` command.
    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Parse and run one input line.
    pub fn respond(&mut self, line: &str) -> Reply {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Reply::Continue(None),
            Err(e) => return Reply::Continue(Some(render_error(&e))),
        };

        tracing::debug!(?command, "Handling command");

        self.handle(command)
            .unwrap_or_else(|e| Reply::Continue(Some(render_error(&e))))
    }

    fn handle(&mut self, command: Command) -> BookResult<Reply> {
        let text = match command {
            Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
            Command::Hello => "How can I help you?".to_string(),
            Command::Help => help_text(),
            Command::Add { name, phone } => self.add(&name, &phone)?,
            Command::Change { name, old, new } => self.change(&name, &old, &new)?,
            Command::Phone { name } => self.phone(&name)?,
            Command::Find { phone } => self.find(&phone)?,
            Command::All => self.all(),
            Command::AddBirthday { name, date } => self.add_birthday(&name, &date)?,
            Command::ShowBirthday { name } => self.show_birthday(&name)?,
            Command::Birthdays => self.birthdays(),
            Command::Delete { name } => self.delete(&name)?,
            Command::DeletePhone { name, phone } => self.delete_phone(&name, &phone)?,
            Command::Unknown(name) => {
                tracing::debug!(command = %name, "Unknown command");
                "Invalid command.".to_string()
            }
        };

        Ok(Reply::Continue(Some(text)))
    }

    fn add(&mut self, name: &str, phone: &str) -> BookResult<String> {
        let outcome = self.book.add_contact(name, [phone])?;
        let display = self.display_name(name);

        if !outcome.phones.skipped.is_empty() {
            return Ok(format!(
                "Phone number '{}' already exists for contact '{}'. Skipping.",
                phone, display
            ));
        }

        if outcome.created {
            Ok(format!(
                "Contact '{}' added with phone number '{}'.",
                display, phone
            ))
        } else {
            Ok(format!(
                "Phone number '{}' added for contact '{}'.",
                phone, display
            ))
        }
    }

    fn change(&mut self, name: &str, old: &str, new: &str) -> BookResult<String> {
        let changed = self.book.edit_phone(name, old, new)?;
        let display = self.display_name(name);

        if changed {
            Ok(format!("Phone number updated for contact '{}'.", display))
        } else {
            Ok(format!(
                "Phone number '{}' not found for contact '{}'.",
                old, display
            ))
        }
    }

    fn phone(&self, name: &str) -> BookResult<String> {
        let record = self.book.get(name)?;

        if record.phones().is_empty() {
            return Ok(format!(
                "Contact '{}' has no phone numbers.",
                record.name()
            ));
        }

        let phones = record
            .phones()
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        Ok(format!(
            "Phone number(s) for contact '{}': {}.",
            record.name(),
            phones
        ))
    }

    fn find(&self, phone: &str) -> BookResult<String> {
        let phone = PhoneNumber::new(phone)?;
        let found = self.book.find_phone(phone.as_str());

        if found.is_empty() {
            return Ok(format!("No contacts found with phone number '{}'.", phone));
        }

        let mut lines = vec![format!("Contacts with phone number '{}':", phone)];
        lines.extend(found.iter().map(|record| record.to_string()));
        Ok(lines.join("\n"))
    }

    fn all(&self) -> String {
        if self.book.is_empty() {
            return "No contacts found.".to_string();
        }

        let mut lines = vec!["All contacts:".to_string()];
        lines.extend(self.book.iter().map(|record| record.to_string()));
        lines.join("\n")
    }

    fn add_birthday(&mut self, name: &str, date: &str) -> BookResult<String> {
        self.book.add_birthday(name, date)?;
        Ok(format!(
            "Birthday added for contact '{}'.",
            self.display_name(name)
        ))
    }

    fn show_birthday(&self, name: &str) -> BookResult<String> {
        let record = self.book.get(name)?;

        Ok(match record.birthday() {
            Some(birthday) => format!(
                "Birthday for contact '{}' is {}.",
                record.name(),
                birthday
            ),
            None => format!("No birthday set for contact '{}'.", record.name()),
        })
    }

    fn birthdays(&self) -> String {
        let report = self.book.upcoming_birthdays(self.today());

        if report.is_empty() {
            return format!("No birthdays in the next {} days.", UPCOMING_WINDOW_DAYS);
        }

        format!("Birthdays to celebrate in the next {} days:\n{}", UPCOMING_WINDOW_DAYS, report)
    }

    fn delete(&mut self, name: &str) -> BookResult<String> {
        let removed = self
            .book
            .delete(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        Ok(format!("Contact '{}' has been deleted.", removed.name()))
    }

    fn delete_phone(&mut self, name: &str, phone: &str) -> BookResult<String> {
        let removed = self.book.delete_phone(name, phone)?;
        let display = self.display_name(name);

        if removed {
            Ok(format!(
                "Phone number '{}' deleted for contact '{}'.",
                phone, display
            ))
        } else {
            Ok(format!(
                "Phone number '{}' not found for contact '{}'.",
                phone, display
            ))
        }
    }

    /// Stored spelling of a contact's name, falling back to the input.
    fn display_name(&self, name: &str) -> String {
        self.book
            .find(name)
            .map(|record| record.name().to_string())
            .unwrap_or_else(|| name.to_string())
    }
}

fn render_error(error: &BookError) -> String {
    tracing::debug!(%error, "Command failed");
    format!("Error: {}", error)
}

fn help_text() -> String {
    let width = USAGE.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(
        USAGE
            .iter()
            .map(|(usage, about)| format!("  {:<width$}  {}", usage, about, width = width)),
    );
    lines.join("\n")
}
