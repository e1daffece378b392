//! Error types for the assistant bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Command errors are never shown raw to the REPL: `commands::dispatch` turns
//! each of them into a failure outcome.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing a user command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Too few tokens for the command (rendered as the command's usage example)
    #[error("😓 Invalid command or arguments. Type 'help' to see available commands.")]
    MissingArguments,

    /// The resolver or a lookup could not find the contact
    #[error("😓 Contact not found.")]
    ContactNotFound,

    /// A field validator rejected the input
    #[error("{0}")]
    ValidationFailed(#[from] ValidationError),

    /// A uniqueness invariant would be violated
    #[error("😓 {0}")]
    DuplicateValue(String),

    /// A phone, note or field is missing on an existing contact
    #[error("😓 {0}")]
    NotFound(String),

    /// Anything the handlers did not anticipate
    #[error("😓 Something went wrong: {0}")]
    Unexpected(String),
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot is not valid JSON for the expected schema
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot was written by a newer version of the program
    #[error("Unsupported snapshot version {found} (latest known is {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The snapshot parsed but breaks an address book invariant
    #[error("Invalid snapshot: {0}")]
    Invalid(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
