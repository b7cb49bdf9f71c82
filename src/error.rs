//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise
//! error handling. User-facing message mapping lives at the command
//! dispatch boundary; these types carry the machine-readable cause.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing a command handler.
///
/// "Contact does not exist." is deliberately NOT a variant: handlers
/// report a missing contact as an ordinary reply string, matching the
/// command contract.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command received the wrong number of positional arguments.
    #[error("wrong number of arguments")]
    WrongArgumentCount,

    /// The command requires a contact name and none was given.
    #[error("missing contact name argument")]
    MissingName,

    /// A value failed domain validation (e.g. malformed phone number).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult = Result<String, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
