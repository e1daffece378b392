//! Assistant Bot - an interactive command-line contact and note manager.
//!
//! Contacts carry phones, a birthday, an email, an address and tagged notes.
//! Commands are typed as a word followed by free-form tokens; the
//! [`resolver`] works out where a multi-word contact name ends and the
//! payload begins.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone, email, birthday, tag)
//! - **models**: Contacts and notes
//! - **book**: The address book and its birthday calendar
//! - **resolver**: Token-boundary policies for splitting names from payloads
//! - **commands**: Command table, handlers and dispatch
//! - **matching**: Suggestions for mistyped commands
//! - **render**: Plain-text tables
//! - **storage**: Versioned JSON snapshots
//! - **config**: Configuration management from environment variables
//! - **repl**: The interactive loop

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod render;
pub mod repl;
pub mod resolver;
pub mod storage;

// Re-export commonly used types
pub use book::{AddressBook, UpcomingBirthday};
pub use commands::{dispatch, Command, CommandContext, CommandOutcome, Status};
pub use config::Config;
pub use error::{CommandError, ConfigError, StorageError};
pub use matching::{CommandMatcher, Suggestion};
pub use models::{Contact, Note};
pub use repl::{Session, SessionEnd};
pub use storage::{BookStorage, JsonFileStorage, MemoryStorage};
