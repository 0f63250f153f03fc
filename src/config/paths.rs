//! Path management for the address book
//!
//! ## Path Resolution Order
//!
//! 1. `ADDRESSBOOK_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory, e.g. `~/.config/addressbook-cli`
//!    on Linux or `%APPDATA%\addressbook-cli\config` on Windows

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::AddressBookError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "ADDRESSBOOK_DATA_DIR";

/// Manages all paths used by the address book
#[derive(Debug, Clone)]
pub struct AddressBookPaths {
    /// Base directory for all address book data
    base_dir: PathBuf,
}

impl AddressBookPaths {
    /// Create a new AddressBookPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, AddressBookError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create AddressBookPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the default path to the address book file
    pub fn book_file(&self) -> PathBuf {
        self.base_dir.join("book.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), AddressBookError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            AddressBookError::Io(format!("Failed to create base directory: {}", e))
        })
    }
}

fn resolve_default_path() -> Result<PathBuf, AddressBookError> {
    ProjectDirs::from("", "", "addressbook-cli")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| AddressBookError::Config("Could not determine home directory".into()))
}
