//! Command line parsing.
//!
//! A line is split on whitespace: the first token, lower-cased, names the
//! command and the remaining tokens are its arguments.

use crate::error::{BookError, BookResult};

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    Phone { name: String },
    Find { phone: String },
    All,
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays,
    Delete { name: String },
    DeletePhone { name: String, phone: String },
    Exit,
    Unknown(String),
}

/// Usage line for every command, shown by `help`.
pub const USAGE: &[(&str, &str)] = &[
    ("hello", "greet the assistant"),
    ("add <name> <phone>", "add a contact or a phone to an existing contact"),
    ("change <name> <old phone> <new phone>", "replace a phone number"),
    ("phone <name>", "show a contact's phone numbers"),
    ("find <phone>", "find contacts with a phone number"),
    ("all", "list every contact"),
    ("add-birthday <name> <DD.MM.YYYY>", "set a contact's birthday"),
    ("show-birthday <name>", "show a contact's birthday"),
    ("birthdays", "birthdays to celebrate in the next 7 days"),
    ("delete <name> [phone]", "delete a contact, or one of its phones"),
    ("help", "show this list"),
    ("close | exit", "leave the assistant"),
];

impl Command {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for a blank line and `Command::Unknown` for an
    /// unrecognised command name.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Usage` when a known command gets the wrong number
    /// of arguments.
    pub fn parse(line: &str) -> BookResult<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            return Ok(None);
        };
        let name = first.to_lowercase();
        let args: Vec<String> = tokens.map(str::to_string).collect();

        let command = match name.as_str() {
            "hello" => Self::no_args(&name, args, Self::Hello)?,
            "help" => Self::no_args(&name, args, Self::Help)?,
            "all" => Self::no_args(&name, args, Self::All)?,
            "birthdays" => Self::no_args(&name, args, Self::Birthdays)?,
            "close" | "exit" => Self::Exit,
            "add" => {
                let [name, phone] = expect_args(args, "add <name> <phone>")?;
                Self::Add { name, phone }
            }
            "change" => {
                let [name, old, new] =
                    expect_args(args, "change <name> <old phone> <new phone>")?;
                Self::Change { name, old, new }
            }
            "phone" => {
                let [name] = expect_args(args, "phone <name>")?;
                Self::Phone { name }
            }
            "find" => {
                let [phone] = expect_args(args, "find <phone>")?;
                Self::Find { phone }
            }
            "add-birthday" => {
                let [name, date] = expect_args(args, "add-birthday <name> <DD.MM.YYYY>")?;
                Self::AddBirthday { name, date }
            }
            "show-birthday" => {
                let [name] = expect_args(args, "show-birthday <name>")?;
                Self::ShowBirthday { name }
            }
            "delete" => {
                let mut args = args.into_iter();
                match (args.next(), args.next(), args.next()) {
                    (Some(name), None, None) => Self::Delete { name },
                    (Some(name), Some(phone), None) => Self::DeletePhone { name, phone },
                    _ => return Err(usage("delete <name> [phone]")),
                }
            }
            _ => Self::Unknown(name),
        };

        Ok(Some(command))
    }

    fn no_args(name: &str, args: Vec<String>, command: Self) -> BookResult<Self> {
        if args.is_empty() {
            Ok(command)
        } else {
            Err(usage(name))
        }
    }
}

fn usage(line: &str) -> BookError {
    BookError::Usage(format!("Usage: {}", line))
}

fn expect_args<const N: usize>(args: Vec<String>, line: &str) -> BookResult<[String; N]> {
    args.try_into().map_err(|_| usage(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   \t ").unwrap(), None);
    }

    #[test]
    fn test_command_name_is_case_insensitive() {
        assert_eq!(parse("HELLO"), Command::Hello);
        assert_eq!(parse("  Exit "), Command::Exit);
        assert_eq!(parse("close"), Command::Exit);
    }

    #[test]
    fn test_arguments_keep_case() {
        assert_eq!(
            parse("add Bob 1234567890"),
            Command::Add {
                name: "Bob".into(),
                phone: "1234567890".into()
            }
        );
        assert_eq!(
            parse("change Bob 1111111111   2222222222"),
            Command::Change {
                name: "Bob".into(),
                old: "1111111111".into(),
                new: "2222222222".into()
            }
        );
    }

    #[test]
    fn test_delete_with_and_without_phone() {
        assert_eq!(parse("delete Al"), Command::Delete { name: "Al".into() });
        assert_eq!(
            parse("delete Al 1112223333"),
            Command::DeletePhone {
                name: "Al".into(),
                phone: "1112223333".into()
            }
        );
        assert!(Command::parse("delete").is_err());
        assert!(Command::parse("delete a b c").is_err());
    }

    #[test]
    fn test_wrong_argument_count_is_usage_error() {
        assert_eq!(
            Command::parse("add Bob"),
            Err(BookError::Usage("Usage: add <name> <phone>".into()))
        );
        assert!(Command::parse("phone").is_err());
        assert!(Command::parse("find 1 2").is_err());
        assert!(Command::parse("add-birthday Bob").is_err());
        assert!(Command::parse("show-birthday").is_err());
        assert!(Command::parse("change a b").is_err());
        assert_eq!(
            Command::parse("all now"),
            Err(BookError::Usage("Usage: all".into()))
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(parse("dance"), Command::Unknown("dance".into()));
    }
}
