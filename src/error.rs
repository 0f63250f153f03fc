//! Custom error types for the address book
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::FieldValidationError;

/// The main error type for address book operations
#[derive(Error, Debug)]
pub enum AddressBookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// A field value failed its format check
    #[error("Validation error: {0}")]
    Validation(String),

    /// Wrong number or shape of command arguments
    #[error("Argument error: {0}")]
    Argument(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AddressBookError {
    /// Whether the error comes from malformed user input rather than the system
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Argument(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for AddressBookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<FieldValidationError> for AddressBookError {
    fn from(err: FieldValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for address book operations
pub type AddressBookResult<T> = Result<T, AddressBookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AddressBookError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_argument_error_is_input_error() {
        let err = AddressBookError::Argument("usage: phone <name>".into());
        assert_eq!(err.to_string(), "Argument error: usage: phone <name>");
        assert!(err.is_input_error());
        assert!(!AddressBookError::Storage("disk full".into()).is_input_error());
    }

    #[test]
    fn test_from_field_validation_error() {
        let err: AddressBookError = FieldValidationError::InvalidPhone("123".into()).into();
        assert!(matches!(err, AddressBookError::Validation(_)));
        assert!(err.is_input_error());
        assert!(err.to_string().contains("123"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AddressBookError = io_err.into();
        assert!(matches!(err, AddressBookError::Io(_)));
        assert!(!err.is_input_error());
    }
}
