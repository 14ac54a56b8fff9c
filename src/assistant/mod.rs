//! The interactive assistant.
//!
//! This module turns text lines into address book operations:
//! - **command**: splitting a line into a command and its arguments
//! - **handlers**: running commands and rendering replies
//! - **session**: the read-eval-print loop over async input and output

pub mod command;
pub mod handlers;
pub mod session;

pub use command::Command;
pub use handlers::{Assistant, Reply};
pub use session::{run_session, GREETING};
