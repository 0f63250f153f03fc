//! Interactive session loop
//!
//! Reads one line at a time, dispatches it to a handler and prints the
//! reply until the user exits. The session owns the address book for its
//! whole lifetime and saves it on the way out.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use super::commands::{find_command, help_text, parse_input, CommandAction};
use super::handlers::{
    add_birthday, add_contact, birthdays, change_contact, input_error, show_all, show_birthday,
    show_phone,
};
use crate::error::AddressBookResult;
use crate::models::AddressBook;
use crate::storage::BookStore;

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    /// Terminal: the book has been saved
    Exiting,
}

/// An interactive session over one address book
pub struct Session {
    book: AddressBook,
    store: BookStore,
    upcoming_days: u32,
    prompt: String,
    state: SessionState,
}

impl Session {
    pub fn new(book: AddressBook, store: BookStore) -> Self {
        Self {
            book,
            store,
            upcoming_days: 7,
            prompt: "Enter a command: ".to_string(),
            state: SessionState::Running,
        }
    }

    /// Set the default window for `birthdays`
    pub fn with_upcoming_days(mut self, days: u32) -> Self {
        self.upcoming_days = days;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Handle one input line using today's local date
    pub fn handle_line(&mut self, line: &str) -> AddressBookResult<String> {
        self.handle_line_on(line, Local::now().date_naive())
    }

    /// Handle one input line as if the current date were `today`
    ///
    /// Only a failed save on exit is returned as an error; every other
    /// problem becomes the reply text.
    pub fn handle_line_on(&mut self, line: &str, today: NaiveDate) -> AddressBookResult<String> {
        let Ok(parsed) = parse_input(line) else {
            return Ok(INVALID_COMMAND.to_string());
        };
        let Some(command) = find_command(&parsed.command) else {
            debug!(command = %parsed.command, "unknown command");
            return Ok(INVALID_COMMAND.to_string());
        };

        debug!(command = command.name, args = parsed.args.len(), "dispatching");
        let args = &parsed.args;
        let reply = match command.action {
            CommandAction::Exit => return self.exit(),
            CommandAction::Hello => GREETING.to_string(),
            CommandAction::Add => input_error(add_contact(args, &mut self.book)),
            CommandAction::Change => input_error(change_contact(args, &mut self.book)),
            CommandAction::Phone => input_error(show_phone(args, &self.book)),
            CommandAction::All => input_error(show_all(&self.book)),
            CommandAction::AddBirthday => input_error(add_birthday(args, &mut self.book)),
            CommandAction::ShowBirthday => input_error(show_birthday(args, &self.book)),
            CommandAction::Birthdays => {
                input_error(birthdays(args, &self.book, today, self.upcoming_days))
            }
        };

        Ok(reply)
    }

    /// Save the book and move to the terminal state
    pub fn exit(&mut self) -> AddressBookResult<String> {
        self.store.save(&self.book)?;
        self.state = SessionState::Exiting;
        info!("session finished");
        Ok(FAREWELL.to_string())
    }

    /// Run the read-eval-print loop until `close`/`exit` or end of input
    ///
    /// End of input is treated like `exit`.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> AddressBookResult<()> {
        writeln!(output, "Welcome to the assistant bot!")?;
        writeln!(output, "{}", help_text())?;

        let mut buf = Vec::new();
        while self.state == SessionState::Running {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            // Undecodable bytes become U+FFFD and fall through as an unknown command
            buf.clear();
            let reply = if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input");
                writeln!(output)?;
                self.exit()?
            } else {
                self.handle_line(&String::from_utf8_lossy(&buf))?
            };

            writeln!(output, "{}", reply)?;
        }

        Ok(())
    }
}
