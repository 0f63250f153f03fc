//! Address book persistence
//!
//! Loads and saves the whole address book as a single JSON file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::AddressBookError;
use crate::models::{AddressBook, Record};

use super::file_io::{read_json, write_json_atomic};

/// Serializable address book layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct BookData {
    #[serde(default)]
    contacts: Vec<Record>,
}

/// Load an address book from `path`
///
/// A missing file yields an empty book. Unreadable or malformed files are
/// errors.
pub fn load_book<P: AsRef<Path>>(path: P) -> Result<AddressBook, AddressBookError> {
    let path = path.as_ref();
    let data: BookData = read_json(path)?;
    let book: AddressBook = data.contacts.into_iter().collect();

    info!(path = %path.display(), contacts = book.len(), "address book loaded");
    Ok(book)
}

/// Save the whole address book to `path`, replacing any existing file
pub fn save_book<P: AsRef<Path>>(book: &AddressBook, path: P) -> Result<(), AddressBookError> {
    let path = path.as_ref();
    let data = BookData {
        contacts: book.records().cloned().collect(),
    };

    write_json_atomic(path, &data)?;
    info!(path = %path.display(), contacts = book.len(), "address book saved");
    Ok(())
}

/// A book file bound to a location on disk
#[derive(Debug, Clone)]
pub struct BookStore {
    path: PathBuf,
}

impl BookStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<AddressBook, AddressBookError> {
        debug!(path = %self.path.display(), "loading address book");
        load_book(&self.path)
    }

    pub fn save(&self, book: &AddressBook) -> Result<(), AddressBookError> {
        debug!(path = %self.path.display(), "saving address book");
        save_book(book, &self.path)
    }
}
