//! User commands: the command table, the handlers and their dispatch.
//!
//! Handlers never print. Each one returns a [`CommandOutcome`] carrying the
//! message for the user and an explicit `changed` flag that tells the REPL
//! whether the address book must be persisted. Every [`CommandError`] is
//! turned into a failure outcome by [`dispatch`], and a handler panic is
//! reported as [`CommandError::Unexpected`], so nothing escapes to the loop.

mod birthdays;
mod contacts;
mod fields;
mod notes;
mod phones;
mod tags;
pub mod usage;

use crate::book::{AddressBook, DEFAULT_BIRTHDAY_WINDOW};
use crate::error::{CommandError, CommandResult};
use crate::render;
use chrono::{Local, NaiveDate};
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// Every command the REPL understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Hello,
    Help,
    Exit,
    Close,
    AddContact,
    EditName,
    RemoveContact,
    AddPhone,
    ChangePhone,
    RemovePhone,
    ShowPhone,
    AddBirthday,
    ShowBirthday,
    EditBirthday,
    RemoveBirthday,
    UpcomingBirthdays,
    Search,
    All,
    AddEmail,
    EditEmail,
    RemoveEmail,
    AddAddress,
    EditAddress,
    RemoveAddress,
    AddNote,
    EditNote,
    RemoveNote,
    SearchNote,
    AddTag,
    RemoveTag,
    SearchTag,
    SortTag,
}

impl Command {
    /// The command table in help order.
    pub const ALL: [Command; 32] = [
        Command::Hello,
        Command::Help,
        Command::Exit,
        Command::Close,
        Command::AddContact,
        Command::EditName,
        Command::RemoveContact,
        Command::AddPhone,
        Command::ChangePhone,
        Command::RemovePhone,
        Command::ShowPhone,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::EditBirthday,
        Command::RemoveBirthday,
        Command::UpcomingBirthdays,
        Command::Search,
        Command::All,
        Command::AddEmail,
        Command::EditEmail,
        Command::RemoveEmail,
        Command::AddAddress,
        Command::EditAddress,
        Command::RemoveAddress,
        Command::AddNote,
        Command::EditNote,
        Command::RemoveNote,
        Command::SearchNote,
        Command::AddTag,
        Command::RemoveTag,
        Command::SearchTag,
        Command::SortTag,
    ];

    /// The word typed at the prompt.
    pub fn word(self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Close => "close",
            Command::AddContact => "addcontact",
            Command::EditName => "editname",
            Command::RemoveContact => "removecontact",
            Command::AddPhone => "addphone",
            Command::ChangePhone => "changephone",
            Command::RemovePhone => "removephone",
            Command::ShowPhone => "showphone",
            Command::AddBirthday => "addbday",
            Command::ShowBirthday => "showbday",
            Command::EditBirthday => "editbday",
            Command::RemoveBirthday => "removebday",
            Command::UpcomingBirthdays => "upcomingbdays",
            Command::Search => "search",
            Command::All => "all",
            Command::AddEmail => "addemail",
            Command::EditEmail => "editemail",
            Command::RemoveEmail => "removeemail",
            Command::AddAddress => "addaddress",
            Command::EditAddress => "editaddress",
            Command::RemoveAddress => "removeaddress",
            Command::AddNote => "addnote",
            Command::EditNote => "editnote",
            Command::RemoveNote => "removenote",
            Command::SearchNote => "searchnote",
            Command::AddTag => "addtag",
            Command::RemoveTag => "removetag",
            Command::SearchTag => "searchtag",
            Command::SortTag => "sorttag",
        }
    }

    /// Every command word, in table order.
    pub fn words() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.word()).collect()
    }

    /// Look up a command word, ignoring case.
    pub fn parse(word: &str) -> Option<Command> {
        let word = word.to_lowercase();
        Self::ALL.iter().copied().find(|c| c.word() == word)
    }

    /// True for the commands that end the session.
    pub fn is_exit(self) -> bool {
        matches!(self, Command::Exit | Command::Close)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// Split a raw input line into a lower-cased command word and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    Some((command, parts.map(String::from).collect()))
}

/// Kind of outcome. Only failures come from errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Info,
    Failure,
}

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub status: Status,
    pub message: String,

    /// Whether the address book was modified and must be saved
    pub changed: bool,
}

impl CommandOutcome {
    /// A successful command that modified the address book.
    pub fn changed(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            changed: true,
        }
    }

    /// A successful read-only command.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            changed: false,
        }
    }

    /// A neutral notice; nothing was modified.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            status: Status::Info,
            message: message.into(),
            changed: false,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: Status::Failure,
            message: message.into(),
            changed: false,
        }
    }
}

/// Environment a command runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandContext {
    /// Reference date for birthday validation and the upcoming report
    pub today: NaiveDate,

    /// Look-ahead for `upcomingbdays`, in days
    pub birthday_window: u32,
}

impl CommandContext {
    pub fn new(today: NaiveDate, birthday_window: u32) -> Self {
        Self {
            today,
            birthday_window,
        }
    }

    /// Context for the current local date.
    pub fn now(birthday_window: u32) -> Self {
        Self::new(Local::now().date_naive(), birthday_window)
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::now(DEFAULT_BIRTHDAY_WINDOW)
    }
}

/// Fail with `MissingArguments` unless at least `min` arguments were given.
pub(crate) fn require_args(args: &[String], min: usize) -> CommandResult<()> {
    if args.len() < min {
        return Err(CommandError::MissingArguments);
    }
    Ok(())
}

/// Fail with `MissingArguments` if any argument was given.
pub(crate) fn forbid_args(args: &[String]) -> CommandResult<()> {
    if !args.is_empty() {
        return Err(CommandError::MissingArguments);
    }
    Ok(())
}

/// Run a command against the book, converting every error into a failure
/// outcome.
pub fn dispatch(
    command: Command,
    args: &[String],
    book: &mut AddressBook,
    ctx: &CommandContext,
) -> CommandOutcome {
    tracing::debug!(%command, args = args.len(), "Dispatching command");

    match catch_unexpected(|| run(command, args, book, ctx)) {
        Ok(outcome) => outcome,
        Err(CommandError::MissingArguments) => CommandOutcome::failure(usage::usage(command)),
        Err(err) => {
            tracing::debug!(%command, error = ?err, "Command failed");
            CommandOutcome::failure(err.to_string())
        }
    }
}

/// Run `handler`, turning a panic into `CommandError::Unexpected` carrying
/// the panic message.
fn catch_unexpected<F>(handler: F) -> CommandResult<CommandOutcome>
where
    F: FnOnce() -> CommandResult<CommandOutcome>,
{
    panic::catch_unwind(AssertUnwindSafe(handler)).unwrap_or_else(|payload| {
        let message = panic_message(payload.as_ref());
        tracing::error!(error = %message, "Command handler panicked");
        Err(CommandError::Unexpected(message))
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown error".to_string()
    }
}

fn run(
    command: Command,
    args: &[String],
    book: &mut AddressBook,
    ctx: &CommandContext,
) -> CommandResult<CommandOutcome> {
    match command {
        Command::Hello => Ok(CommandOutcome::success("😊 How can I help you?")),
        Command::Help => Ok(CommandOutcome::info(render::help_table())),
        Command::Exit | Command::Close => Ok(CommandOutcome::success("👋 Good bye!")),
        Command::AddContact => contacts::add_contact(args, book),
        Command::EditName => contacts::edit_name(args, book),
        Command::RemoveContact => contacts::remove_contact(args, book),
        Command::Search => contacts::search(args, book),
        Command::All => contacts::show_all(args, book),
        Command::AddPhone => phones::add_phone(args, book),
        Command::ChangePhone => phones::change_phone(args, book),
        Command::RemovePhone => phones::remove_phone(args, book),
        Command::ShowPhone => phones::show_phone(args, book),
        Command::AddBirthday => birthdays::add_birthday(args, book, ctx),
        Command::ShowBirthday => birthdays::show_birthday(args, book),
        Command::EditBirthday => birthdays::edit_birthday(args, book, ctx),
        Command::RemoveBirthday => birthdays::remove_birthday(args, book),
        Command::UpcomingBirthdays => birthdays::upcoming(args, book, ctx),
        Command::AddEmail => fields::add_email(args, book),
        Command::EditEmail => fields::edit_email(args, book),
        Command::RemoveEmail => fields::remove_email(args, book),
        Command::AddAddress => fields::add_address(args, book),
        Command::EditAddress => fields::edit_address(args, book),
        Command::RemoveAddress => fields::remove_address(args, book),
        Command::AddNote => notes::add_note(args, book),
        Command::EditNote => notes::edit_note(args, book),
        Command::RemoveNote => notes::remove_note(args, book),
        Command::SearchNote => notes::search_note(args, book),
        Command::AddTag => tags::add_tag(args, book),
        Command::RemoveTag => tags::remove_tag(args, book),
        Command::SearchTag => tags::search_tag(args, book),
        Command::SortTag => tags::sort_tag(args, book),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_panic_becomes_unexpected_error() {
        let err = catch_unexpected(|| panic!("index out of range")).unwrap_err();
        assert_eq!(err, CommandError::Unexpected("index out of range".to_string()));
        assert_eq!(err.to_string(), "😓 Something went wrong: index out of range");

        let err = catch_unexpected(|| panic!("bad value {}", 7)).unwrap_err();
        assert_eq!(err, CommandError::Unexpected("bad value 7".to_string()));
    }

    #[test]
    fn test_catch_unexpected_passes_results_through() {
        let outcome = catch_unexpected(|| Ok(CommandOutcome::success("fine"))).unwrap();
        assert_eq!(outcome.message, "fine");
        assert_eq!(
            catch_unexpected(|| Err(CommandError::ContactNotFound)).unwrap_err(),
            CommandError::ContactNotFound
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Command::parse("AddContact"), Some(Command::AddContact));
        assert_eq!(Command::parse("upcomingbdays"), Some(Command::UpcomingBirthdays));
        assert_eq!(Command::parse("ex"), None);
    }

    #[test]
    fn test_every_word_round_trips() {
        for command in Command::ALL {
            assert_eq!(Command::parse(command.word()), Some(command));
        }
        assert_eq!(Command::words().len(), 32);
    }

    #[test]
    fn test_parse_input() {
        let (cmd, args) = parse_input("  ADDNOTE Ivan  call back ").unwrap();
        assert_eq!(cmd, "addnote");
        assert_eq!(args, vec!["Ivan", "call", "back"]);
        assert!(parse_input("   ").is_none());
    }

    #[test]
    fn test_missing_arguments_render_usage() {
        let mut book = AddressBook::new();
        let ctx = CommandContext::default();
        let outcome = dispatch(Command::AddPhone, &[], &mut book, &ctx);
        assert_eq!(outcome.status, Status::Failure);
        assert!(!outcome.changed);
        assert!(outcome.message.contains("'addphone Ivan 0661234567'"));
    }

    #[test]
    fn test_hello() {
        let mut book = AddressBook::new();
        let outcome = dispatch(Command::Hello, &[], &mut book, &CommandContext::default());
        assert_eq!(outcome.message, "😊 How can I help you?");
    }
}
