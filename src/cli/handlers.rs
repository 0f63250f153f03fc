//! Command handlers
//!
//! Each handler turns parsed arguments into an address book mutation or
//! query and returns the reply text. Handlers return errors for bad input;
//! [`input_error`] turns those into the message shown to the user.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{AddressBookError, AddressBookResult};
use crate::models::{AddressBook, Name, Record};

/// Reply for any malformed argument list or field value
pub const INPUT_ERROR_MESSAGE: &str = "Give me name and phone please.";

/// Translate a handler result into the text shown to the user
pub fn input_error(result: AddressBookResult<String>) -> String {
    match result {
        Ok(reply) => reply,
        Err(e) if e.is_input_error() => {
            debug!(error = %e, "rejected command input");
            INPUT_ERROR_MESSAGE.to_string()
        }
        Err(e) => {
            warn!(error = %e, "command failed");
            format!("Error: {}", e)
        }
    }
}

fn usage(synopsis: &str) -> AddressBookError {
    AddressBookError::Argument(format!("usage: {}", synopsis))
}

fn not_found(name: &str) -> String {
    format!("name {} not found", name)
}

/// `add <name> <phone>`: create the contact if needed and append the phone
///
/// The phone is validated before anything is inserted, so a bad number never
/// leaves behind an empty contact.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> AddressBookResult<String> {
    let [name, phone, ..] = args else {
        return Err(usage("add <name> <phone>"));
    };

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(Name::new(name.as_str())?);
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old> <new>`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> AddressBookResult<String> {
    let [name, old_phone, new_phone] = args else {
        return Err(usage("change <name> <old phone> <new phone>"));
    };

    let Some(record) = book.find_mut(name) else {
        return Ok(not_found(name));
    };

    if !record.edit_phone(old_phone, new_phone)? {
        debug!(contact = %name, phone = %old_phone, "phone to change not found");
    }
    Ok("Contact updated.".to_string())
}

/// `phone <name>`
pub fn show_phone(args: &[String], book: &AddressBook) -> AddressBookResult<String> {
    let [name] = args else {
        return Err(usage("phone <name>"));
    };

    Ok(book
        .find(name)
        .map(|record| record.to_string())
        .unwrap_or_else(|| not_found(name)))
}

/// `all`: one line per contact
pub fn show_all(book: &AddressBook) -> AddressBookResult<String> {
    Ok(book
        .iter()
        .map(|(name, record)| format!("{} {}", name, record))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> AddressBookResult<String> {
    let [name, birthday, ..] = args else {
        return Err(usage("add-birthday <name> <DD.MM.YYYY>"));
    };

    let Some(record) = book.find_mut(name) else {
        return Ok(not_found(name));
    };

    record.add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> AddressBookResult<String> {
    let [name] = args else {
        return Err(usage("show-birthday <name>"));
    };

    Ok(match book.find(name).and_then(Record::birthday) {
        Some(birthday) => format!("{} birthday is {}", name, birthday),
        None => format!("No birthday for {}", name),
    })
}

/// `birthdays [days]`: contacts whose birthday falls in the coming window
pub fn birthdays(
    args: &[String],
    book: &AddressBook,
    today: NaiveDate,
    default_days: u32,
) -> AddressBookResult<String> {
    let days = match args {
        [] => default_days,
        [days] => days
            .parse::<u32>()
            .map_err(|_| usage("birthdays [days]"))?,
        _ => return Err(usage("birthdays [days]")),
    };

    Ok(book
        .upcoming_birthdays(today, days)
        .into_iter()
        .filter_map(|record| {
            record
                .birthday()
                .map(|birthday| format!("{}: {}", record.name(), birthday))
        })
        .collect::<Vec<_>>()
        .join("\n"))
}
