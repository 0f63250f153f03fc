//! Interactive command layer
//!
//! This module contains the command table and input parser, the command
//! handlers and the session loop that ties them to the address book.

pub mod commands;
pub mod handlers;
pub mod session;

pub use commands::{find_command, parse_input, Command, CommandAction, ParsedInput, COMMANDS};
pub use handlers::{input_error, INPUT_ERROR_MESSAGE};
pub use session::{Session, SessionState};
