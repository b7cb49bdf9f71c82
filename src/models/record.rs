//! Record model representing a single contact.

use crate::domain::{Name, Phone, ValidationError};
use std::fmt;

/// A contact entry: one name plus zero or more phone numbers.
///
/// The name is immutable after creation. Phones keep insertion order and
/// duplicates are permitted; every stored phone has already passed
/// [`Phone`] validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
}

impl Record {
    /// Create a new record with no phone numbers.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
        }
    }

    /// Get the contact name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Get the phone numbers in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate and append a phone number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the value is not
    /// exactly 10 decimal digits. The record is unchanged on error.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `phone`. No-op if absent.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Replace all occurrences of `old` with a single `new` phone.
    ///
    /// Not atomic: `old` is removed before `new` is validated, so an
    /// invalid `new` leaves the record with `old` gone and nothing added.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `new` is invalid.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        self.remove_phone(old);
        self.add_phone(new)
    }

    /// Find the first phone equal to `phone`, in scan order.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
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
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record::new(Name::new(name).unwrap())
    }

    #[test]
    fn test_add_phone_validates() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        assert!(rec.add_phone("123").is_err());
        assert_eq!(rec.phones().len(), 1);
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        rec.add_phone("5551234567").unwrap();
        rec.add_phone("1234567890").unwrap();
        rec.remove_phone("1234567890");
        assert_eq!(rec.phones().len(), 1);
        assert_eq!(rec.phones()[0].as_str(), "5551234567");
    }

    #[test]
    fn test_remove_phone_absent_is_noop() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        rec.remove_phone("0000000000");
        assert_eq!(rec.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        rec.edit_phone("1234567890", "5551234567").unwrap();
        assert_eq!(rec.phones().len(), 1);
        assert_eq!(rec.phones()[0].as_str(), "5551234567");
    }

    #[test]
    fn test_edit_phone_invalid_new_is_not_atomic() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        assert!(rec.edit_phone("1234567890", "bad").is_err());
        // old is already gone, new was never added
        assert!(rec.phones().is_empty());
    }

    #[test]
    fn test_find_phone_first_match() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        rec.add_phone("5551234567").unwrap();
        assert_eq!(rec.find_phone("5551234567").unwrap().as_str(), "5551234567");
        assert!(rec.find_phone("0000000000").is_none());
    }

    #[test]
    fn test_display_joins_phones_in_insertion_order() {
        let mut rec = record("John");
        rec.add_phone("5555555555").unwrap();
        rec.add_phone("1112223333").unwrap();
        assert_eq!(
            rec.to_string(),
            "Contact name: John, phones: 5555555555; 1112223333"
        );
    }

    #[test]
    fn test_display_no_phones() {
        let rec = record("John");
        assert_eq!(rec.to_string(), "Contact name: John, phones: ");
    }
}
