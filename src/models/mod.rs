//! Core data models for the address book
//!
//! This module contains the validated contact fields, the contact record and
//! the address book that owns all records.

pub mod book;
pub mod fields;
pub mod record;

pub use book::AddressBook;
pub use fields::{Birthday, FieldValidationError, Name, Phone, BIRTHDAY_FORMAT};
pub use record::Record;
