//! End-to-end tests for contact CRUD commands.
//!
//! These tests drive the dispatch layer the same way the REPL does,
//! validating the full reply contract for adding, changing, deleting,
//! and listing contacts.

use contact_assistant::commands::{dispatch, Outcome};
use contact_assistant::AddressBook;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn reply(command: &str, arg_values: &[&str], book: &mut AddressBook) -> String {
    match dispatch(command, &args(arg_values), book) {
        Outcome::Reply(reply) => reply,
        other => panic!("expected a reply from {command}, got {other:?}"),
    }
}

#[test]
fn test_contact_crud_lifecycle() {
    let mut book = AddressBook::new();

    // CREATE
    assert_eq!(reply("add", &["Alice", "1234567890"], &mut book), "Contact added.");
    assert_eq!(book.find("Alice").unwrap().phones()[0].as_str(), "1234567890");

    // READ
    assert_eq!(
        reply("phone", &["Alice"], &mut book),
        "Contact name: Alice, phones: 1234567890"
    );

    // UPDATE
    assert_eq!(
        reply("change", &["Alice", "1234567890", "5559876543"], &mut book),
        "Contact updated."
    );
    assert_eq!(
        reply("phone", &["Alice"], &mut book),
        "Contact name: Alice, phones: 5559876543"
    );

    // DELETE
    assert_eq!(reply("delete", &["Alice"], &mut book), "Contact deleted.");
    assert!(book.find("Alice").is_none());
    assert_eq!(reply("phone", &["Alice"], &mut book), "Contact does not exist.");
}

#[test]
fn test_add_duplicate_preserves_original_record() {
    let mut book = AddressBook::new();
    reply("add", &["Alice", "1234567890"], &mut book);

    assert_eq!(
        reply("add", &["Alice", "5555555555"], &mut book),
        "Contact already exists."
    );

    let phones = book.find("Alice").unwrap().phones();
    assert_eq!(phones.len(), 1);
    assert_eq!(phones[0].as_str(), "1234567890");
}

#[test]
fn test_change_and_delete_nonexistent_contact() {
    let mut book = AddressBook::new();
    assert_eq!(
        reply("change", &["Bob", "1111111111", "2222222222"], &mut book),
        "Contact does not exist."
    );
    assert_eq!(reply("delete", &["Bob"], &mut book), "Contact does not exist.");
}

#[test]
fn test_all_lists_records_in_insertion_order() {
    let mut book = AddressBook::new();
    assert_eq!(reply("all", &[], &mut book), "No contacts found.");

    reply("add", &["Carol", "1111111111"], &mut book);
    reply("add", &["Alice", "2222222222"], &mut book);
    reply("add", &["Bob", "3333333333"], &mut book);

    assert_eq!(
        reply("all", &[], &mut book),
        "Contact name: Carol, phones: 1111111111\n\
         Contact name: Alice, phones: 2222222222\n\
         Contact name: Bob, phones: 3333333333"
    );
}

#[test]
fn test_argument_error_replies() {
    let mut book = AddressBook::new();
    assert_eq!(reply("add", &[], &mut book), "Give me name and phone please.");
    assert_eq!(
        reply("add", &["Alice", "1234567890", "extra"], &mut book),
        "Give me name and phone please."
    );
    assert_eq!(
        reply("change", &["Alice"], &mut book),
        "Give me name and phone please."
    );
    assert_eq!(reply("delete", &[], &mut book), "Enter user name.");
    assert_eq!(reply("phone", &[], &mut book), "Enter user name.");
}

#[test]
fn test_invalid_phone_reports_unexpected_error() {
    let mut book = AddressBook::new();
    assert_eq!(
        reply("add", &["Alice", "not-digits"], &mut book),
        "An unexpected error occurred: Phone number must be 10 digits: not-digits"
    );
    assert!(book.find("Alice").is_none());
}

#[test]
fn test_change_with_invalid_new_phone_is_not_atomic() {
    let mut book = AddressBook::new();
    reply("add", &["Alice", "1234567890"], &mut book);

    let error_reply = reply("change", &["Alice", "1234567890", "123"], &mut book);
    assert_eq!(
        error_reply,
        "An unexpected error occurred: Phone number must be 10 digits: 123"
    );

    // the old phone was already removed when validation of the new one failed
    assert!(book.find("Alice").unwrap().phones().is_empty());
}
