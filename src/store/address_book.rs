//! Insertion-ordered in-memory store of contact records.

use crate::models::Record;

/// The in-memory collection of all records, keyed by contact name.
///
/// Holds at most one record per name. Iteration yields records in
/// insertion order; overwriting an existing name keeps its position.
/// Nothing is persisted: the book is created empty and discarded at
/// process exit.
///
/// The store is a plain `Vec` scanned linearly by name. Contact lists
/// here are small and interactive, so an ordered map buys nothing.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, overwriting any existing record with the same name.
    ///
    /// An overwritten record keeps its original position in iteration
    /// order.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(idx) => self.records[idx] = record,
            None => self.records.push(record),
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|idx| &self.records[idx])
    }

    /// Look up a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove the record with the given name, if present. No-op otherwise.
    pub fn delete(&mut self, name: &str) {
        if let Some(idx) = self.position(name) {
            self.records.remove(idx);
        }
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}
