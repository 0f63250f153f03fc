//! Address book model
//!
//! Maps contact names to records. Names are unique keys; iteration is by
//! name so listings come out in a stable order.

use chrono::{Datelike, Days, NaiveDate};
use std::collections::BTreeMap;

use super::record::Record;

/// All contacts, keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    /// Exact-match lookup by name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a contact; returns the removed record, if any
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    /// Iterate over (name, record) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.records.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Iterate over records only
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose birthday falls within `[today, today + days]`
    ///
    /// The birthday is moved into `today`'s year before comparing, so a
    /// birthday early next year is not found from late December. Birthdays
    /// on 29 February are skipped in non-leap years. A window reaching past
    /// the last representable date is clamped to it.
    pub fn upcoming_birthdays(&self, today: NaiveDate, days: u32) -> Vec<&Record> {
        let until = today
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX);

        self.records()
            .filter(|record| {
                record
                    .birthday()
                    .and_then(|b| b.in_year(today.year()))
                    .is_some_and(|date| today <= date && date <= until)
            })
            .collect()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
