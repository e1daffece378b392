//! Shared helpers for integration tests.
//!
//! Every test drives commands through `dispatch`, the same entry point the
//! REPL uses, against a book pinned to a fixed reference date.

use assistant_bot::{dispatch, AddressBook, Command, CommandContext, CommandOutcome, Status};
use chrono::NaiveDate;

pub mod fixtures;

/// Reference date for every test: Monday 10 June 2024.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).expect("valid date")
}

/// A book plus the context commands run in.
pub struct Harness {
    pub book: AddressBook,
    pub ctx: CommandContext,
}

#[allow(dead_code)]
impl Harness {
    pub fn new() -> Self {
        Self::with_book(AddressBook::new())
    }

    pub fn with_book(book: AddressBook) -> Self {
        Self {
            book,
            ctx: CommandContext::new(today(), 7),
        }
    }

    /// Run one input line as the REPL would.
    pub fn run(&mut self, line: &str) -> CommandOutcome {
        let (word, args) =
            assistant_bot::commands::parse_input(line).expect("line must not be blank");
        let command = Command::parse(&word).unwrap_or_else(|| panic!("unknown command {}", word));
        dispatch(command, &args, &mut self.book, &self.ctx)
    }

    /// Run a line that must succeed, returning its message.
    pub fn ok(&mut self, line: &str) -> String {
        let outcome = self.run(line);
        assert_ne!(
            outcome.status,
            Status::Failure,
            "'{}' failed: {}",
            line,
            outcome.message
        );
        outcome.message
    }

    /// Run a line that must fail, returning its message.
    pub fn fail(&mut self, line: &str) -> String {
        let outcome = self.run(line);
        assert_eq!(
            outcome.status,
            Status::Failure,
            "'{}' unexpectedly succeeded: {}",
            line,
            outcome.message
        );
        assert!(!outcome.changed, "a failed command must not ask for a save");
        outcome.message
    }
}
