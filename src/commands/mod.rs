//! Command parsing, handlers, and dispatch for the assistant REPL.
//!
//! Three pieces:
//! - **parse**: split a raw input line into a command token and args
//! - **handlers**: one function per command's business logic
//! - **dispatch**: a static name-to-handler registry plus the mapping
//!   from handler errors to user-facing reply strings

pub mod dispatch;
pub mod handlers;
pub mod parse;

pub use dispatch::{dispatch, Outcome};
pub use parse::parse_input;
