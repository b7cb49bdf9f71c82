//! Command dispatch: a static registry mapping command names to handlers.

use super::handlers;
use crate::error::{CommandError, CommandResult};
use crate::store::AddressBook;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

/// A command handler: parsed args plus the book, producing a reply.
pub type Handler = fn(&[String], &mut AddressBook) -> CommandResult;

static REGISTRY: Lazy<HashMap<&'static str, Handler>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, Handler> = HashMap::new();
    map.insert("hello", handlers::hello);
    map.insert("add", handlers::add_contact);
    map.insert("change", handlers::change_contact);
    map.insert("delete", handlers::delete_contact);
    map.insert("phone", handlers::show_phone);
    map.insert("all", handlers::show_all);
    map
});

/// Result of dispatching one parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A reply line to print.
    Reply(String),
    /// The user asked to leave; the loop should print the farewell and stop.
    Exit,
    /// No such command.
    Unrecognized,
}

/// Look up and invoke the handler for `command`.
///
/// Handler errors never escape: they are converted to the user-facing
/// reply strings here, at the boundary.
pub fn dispatch(command: &str, args: &[String], book: &mut AddressBook) -> Outcome {
    if matches!(command, "exit" | "close") {
        return Outcome::Exit;
    }

    match REGISTRY.get(command) {
        Some(handler) => Outcome::Reply(handler(args, book).unwrap_or_else(|err| {
            debug!(command, %err, "handler returned an error");
            error_reply(&err)
        })),
        None => Outcome::Unrecognized,
    }
}

/// Map a handler error to its user-facing reply.
///
/// Validation failures (e.g. a malformed phone number) fall through to
/// the generic unexpected-error message instead of a dedicated one,
/// matching the original command contract.
fn error_reply(err: &CommandError) -> String {
    match err {
        CommandError::WrongArgumentCount => "Give me name and phone please.".to_string(),
        CommandError::MissingName => "Enter user name.".to_string(),
        other => format!("An unexpected error occurred: {}", other),
    }
}
