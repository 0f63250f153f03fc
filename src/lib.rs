//! addressbook - Interactive command-line address book
//!
//! This library provides the core functionality for the address book
//! assistant: validated contact fields, records with phones and birthdays,
//! the address book itself, JSON persistence and the interactive command
//! session.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Contact fields, records and the address book
//! - `storage`: JSON file storage layer
//! - `cli`: Command parsing, handlers and the session loop
//!
//! # Example
//!
//! ```rust,no_run
//! use addressbook::cli::Session;
//! use addressbook::storage::BookStore;
//!
//! # fn main() -> Result<(), addressbook::AddressBookError> {
//! let store = BookStore::new("book.json");
//! let mut session = Session::new(store.load()?, store);
//! println!("{}", session.handle_line("add Alice 1234567890")?);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{AddressBookError, AddressBookResult};
