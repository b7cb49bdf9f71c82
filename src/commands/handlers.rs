//! Business logic for each assistant command.
//!
//! Every handler takes the parsed positional arguments plus the address
//! book and returns either a display string or a [`CommandError`]. The
//! caller (dispatch) turns errors into user-facing replies; a missing
//! contact is reported in-band as "Contact does not exist." rather than
//! as an error.

use crate::domain::Name;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use crate::store::AddressBook;

const CONTACT_NOT_FOUND: &str = "Contact does not exist.";

/// `hello` — greet the user.
pub fn hello(_args: &[String], _book: &mut AddressBook) -> CommandResult {
    Ok("How can I help you?".to_string())
}

/// `add <name> <phone>` — create a contact with one phone number.
///
/// Refuses to overwrite: an existing name replies "Contact already
/// exists." and leaves the stored record untouched.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult {
    let [name, phone] = args else {
        return Err(CommandError::WrongArgumentCount);
    };

    if book.find(name).is_some() {
        return Ok("Contact already exists.".to_string());
    }

    let mut record = Record::new(Name::new(name.as_str())?);
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old_phone> <new_phone>` — replace a phone number.
///
/// Inherits [`Record::edit_phone`]'s non-atomic semantics: an invalid
/// new number leaves the old one removed.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult {
    let [name, old_phone, new_phone] = args else {
        return Err(CommandError::WrongArgumentCount);
    };

    let Some(record) = book.find_mut(name) else {
        return Ok(CONTACT_NOT_FOUND.to_string());
    };

    record.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

/// `delete <name>` — remove a contact entirely.
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult {
    let Some(name) = args.first() else {
        return Err(CommandError::MissingName);
    };

    if book.find(name).is_none() {
        return Ok(CONTACT_NOT_FOUND.to_string());
    }

    book.delete(name);
    Ok("Contact deleted.".to_string())
}

/// `phone <name>` — show one contact's record.
pub fn show_phone(args: &[String], book: &mut AddressBook) -> CommandResult {
    let Some(name) = args.first() else {
        return Err(CommandError::MissingName);
    };

    match book.find(name) {
        Some(record) => Ok(record.to_string()),
        None => Ok(CONTACT_NOT_FOUND.to_string()),
    }
}

/// `all` — list every record, one per line, in insertion order.
pub fn show_all(_args: &[String], book: &mut AddressBook) -> CommandResult {
    if book.is_empty() {
        return Ok("No contacts found.".to_string());
    }

    let lines: Vec<String> = book.iter().map(Record::to_string).collect();
    Ok(lines.join("\n"))
}
