//! User settings for the address book
//!
//! Stores where the book lives, how far ahead `birthdays` looks and the
//! prompt shown by the interactive session.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::AddressBookPaths;
use crate::error::AddressBookError;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Address book file; falls back to the data directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_file: Option<PathBuf>,

    /// Days ahead covered by the `birthdays` command
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: u32,

    /// Prompt printed before each command
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_upcoming_days() -> u32 {
    7
}

fn default_prompt() -> String {
    "Enter a command: ".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            book_file: None,
            upcoming_days: default_upcoming_days(),
            prompt: default_prompt(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &AddressBookPaths) -> Result<Self, AddressBookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                AddressBookError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                AddressBookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AddressBookPaths) -> Result<(), AddressBookError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            AddressBookError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            AddressBookError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Resolve the book file: explicit override, then settings, then default
    pub fn resolve_book_file(
        &self,
        paths: &AddressBookPaths,
        override_path: Option<PathBuf>,
    ) -> PathBuf {
        override_path
            .or_else(|| self.book_file.clone())
            .unwrap_or_else(|| paths.book_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.upcoming_days, 7);
        assert_eq!(settings.prompt, "Enter a command: ");
        assert!(settings.book_file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AddressBookPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            upcoming_days: 14,
            book_file: Some(PathBuf::from("/tmp/contacts.json")),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"upcoming_days": 3}"#).unwrap();
        assert_eq!(settings.upcoming_days, 3);
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.prompt, "Enter a command: ");
    }

    #[test]
    fn test_resolve_book_file_order() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AddressBookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        assert_eq!(settings.resolve_book_file(&paths, None), paths.book_file());

        settings.book_file = Some(PathBuf::from("from-settings.json"));
        assert_eq!(
            settings.resolve_book_file(&paths, None),
            PathBuf::from("from-settings.json")
        );
        assert_eq!(
            settings.resolve_book_file(&paths, Some(PathBuf::from("book.txt"))),
            PathBuf::from("book.txt")
        );
    }
}
