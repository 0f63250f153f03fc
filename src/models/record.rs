//! Contact record model
//!
//! A record holds one contact: a fixed name, an ordered list of phones and
//! at most one birthday.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::fields::{Birthday, FieldValidationError, Name, Phone};

/// One contact in the address book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    /// Phones in insertion order; duplicates are allowed
    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone
    pub fn add_phone(&mut self, phone: &str) -> Result<(), FieldValidationError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove every phone equal to `phone`
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Replace the first phone equal to `old` with `new`
    ///
    /// `new` is validated before the lookup. When `old` is not present the
    /// record is left untouched and no error is reported; returns whether a
    /// replacement happened.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, FieldValidationError> {
        let new = Phone::new(new)?;
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = new;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Look up a phone by exact value
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate and set the birthday, replacing any previous one
    pub fn add_birthday(&mut self, date: &str) -> Result<(), FieldValidationError> {
        self.birthday = Some(Birthday::parse(date)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| "None".to_string());

        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}
