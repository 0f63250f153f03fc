//! Validated field values for a contact
//!
//! Each field is a small newtype whose constructor enforces its format, so a
//! value that exists is always valid. Serde goes through the same
//! constructors, which keeps corrupt storage from sneaking bad values in.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date format used for birthdays, both for input and display
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Number of digits in a phone number
pub const PHONE_LEN: usize = 10;

/// Contact name, used as the address book key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Create a name; fails only when the value is empty
    pub fn new(value: impl Into<String>) -> Result<Self, FieldValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(FieldValidationError::EmptyName);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = FieldValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

/// A phone number of exactly ten decimal digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Create a phone number, rejecting anything but ten ASCII digits
    pub fn new(value: impl Into<String>) -> Result<Self, FieldValidationError> {
        let value = value.into();
        if value.len() != PHONE_LEN || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(FieldValidationError::InvalidPhone(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Phone {
    type Error = FieldValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

/// A birthday, parsed from and rendered as `DD.MM.YYYY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday in strict `DD.MM.YYYY` form
    ///
    /// Single-digit days or months and impossible dates such as `31.02.2000`
    /// are rejected.
    pub fn parse(value: &str) -> Result<Self, FieldValidationError> {
        if !has_birthday_shape(value) {
            return Err(FieldValidationError::InvalidBirthday(value.to_string()));
        }

        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| FieldValidationError::InvalidBirthday(value.to_string()))
    }

    /// The anniversary of this birthday in the given year
    ///
    /// Returns `None` when the date does not exist that year (29 February
    /// outside a leap year).
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        self.0.with_year(year)
    }
}

fn has_birthday_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl TryFrom<String> for Birthday {
    type Error = FieldValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

/// Validation errors for contact fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValidationError {
    EmptyName,
    InvalidPhone(String),
    InvalidBirthday(String),
}

impl fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(value) => {
                write!(f, "Phone '{}' must contain exactly {} digits", value, PHONE_LEN)
            }
            Self::InvalidBirthday(value) => {
                write!(f, "Invalid date '{}'. Use DD.MM.YYYY", value)
            }
        }
    }
}

impl std::error::Error for FieldValidationError {}
