//! Contact Assistant - an interactive command-line bot for managing
//! contacts and their phone numbers.
//!
//! All state is held in memory for the lifetime of the process; nothing
//! is persisted.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (contact names, phone numbers)
//! - **models**: The `Record` contact entry
//! - **store**: The insertion-ordered in-memory `AddressBook`
//! - **commands**: Input parsing, per-command handlers, and dispatch
//! - **repl**: The blocking read-eval-print loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod store;

pub use config::Config;
pub use domain::{Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::Record;
pub use store::AddressBook;
