//! The interactive loop.
//!
//! Reads one command per line, dispatches it and prints the outcome. The
//! address book is saved after every command that changed it, on
//! `exit`/`close`, on end of input and on interrupt.

use crate::book::AddressBook;
use crate::commands::{self, Command, CommandContext};
use crate::config::Config;
use crate::matching::CommandMatcher;
use crate::storage::{self, BookStorage};
use chrono::NaiveDate;
use std::future::Future;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const WELCOME: &str = "😊 Welcome to the assistant bot!";
pub const HELP_HINT: &str = "Type 'help' to see available commands.";
pub const PROMPT: &str = "Enter a command: ";
pub const EMPTY_INPUT: &str = "😓 You didn’t enter anything! Please try again.";
pub const GOODBYE: &str = "👋 Good bye!";
pub const SAVED: &str = "📚 Address book saved successfully.";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// `exit` or `close`
    Exit,

    /// Input closed
    EndOfInput,

    /// Interrupt signal
    Interrupted,
}

/// One interactive session over an address book and its storage.
pub struct Session<S: BookStorage> {
    book: AddressBook,
    storage: S,
    matcher: CommandMatcher,
    birthday_window: u32,
    load_warning: Option<String>,

    /// Fixed reference date; `None` means the local date at each command
    today: Option<NaiveDate>,
}

impl<S: BookStorage> Session<S> {
    /// Load the book from `storage`, falling back to an empty one.
    pub fn open(storage: S, config: &Config) -> Self {
        let (book, load_warning) = storage::load_or_empty(&storage);
        Self {
            book,
            storage,
            matcher: CommandMatcher::new(
                &Command::words(),
                config.max_suggestions,
                config.suggestion_cutoff,
            ),
            birthday_window: config.upcoming_birthdays_days,
            load_warning,
            today: None,
        }
    }

    /// Pin the reference date instead of reading the clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn context(&self) -> CommandContext {
        match self.today {
            Some(today) => CommandContext::new(today, self.birthday_window),
            None => CommandContext::now(self.birthday_window),
        }
    }

    /// Save the book, reporting a failure to the user without ending the
    /// session. Returns whether the save succeeded.
    async fn save<W>(&self, output: &mut W) -> std::io::Result<bool>
    where
        W: AsyncWrite + Unpin,
    {
        match self.storage.save(&self.book) {
            Ok(()) => Ok(true),
            Err(err) => {
                tracing::error!(error = %err, location = %self.storage.location(), "Failed to save address book");
                write_line(
                    output,
                    &format!(
                        "😓 Error saving address book to '{}': {}",
                        self.storage.location(),
                        err
                    ),
                )
                .await?;
                Ok(false)
            }
        }
    }

    /// Run until `exit`, end of input or Ctrl-C.
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> std::io::Result<SessionEnd>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        self.run_until(input, output, async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %err, "Cannot listen for interrupt");
                std::future::pending::<()>().await;
            }
        })
        .await
    }

    /// Run until `exit`, end of input or `interrupt` resolves.
    pub async fn run_until<R, W, F>(
        &mut self,
        input: R,
        output: &mut W,
        interrupt: F,
    ) -> std::io::Result<SessionEnd>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        F: Future<Output = ()>,
    {
        self.greet(output).await?;

        let mut lines = input.lines();
        tokio::pin!(interrupt);

        loop {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;

            let line = tokio::select! {
                line = lines.next_line() => line?,
                _ = &mut interrupt => {
                    tracing::info!("Interrupted");
                    write_line(output, "").await?;
                    write_line(output, GOODBYE).await?;
                    if self.save(output).await? {
                        write_line(output, SAVED).await?;
                    }
                    return Ok(SessionEnd::Interrupted);
                }
            };

            let Some(line) = line else {
                tracing::info!("End of input");
                write_line(output, "").await?;
                self.save(output).await?;
                write_line(output, GOODBYE).await?;
                return Ok(SessionEnd::EndOfInput);
            };

            if let Some(end) = self.handle_line(&line, output).await? {
                return Ok(end);
            }
        }
    }

    async fn greet<W>(&mut self, output: &mut W) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        if let Some(warning) = self.load_warning.take() {
            write_line(output, &warning).await?;
        }
        write_line(output, WELCOME).await?;

        let ctx = self.context();
        let report = commands::dispatch(Command::UpcomingBirthdays, &[], &mut self.book, &ctx);
        write_line(output, &report.message).await?;
        write_line(output, HELP_HINT).await
    }

    async fn handle_line<W>(&mut self, line: &str, output: &mut W) -> std::io::Result<Option<SessionEnd>>
    where
        W: AsyncWrite + Unpin,
    {
        let Some((word, args)) = commands::parse_input(line) else {
            write_line(output, EMPTY_INPUT).await?;
            return Ok(None);
        };

        let Some(command) = Command::parse(&word) else {
            tracing::debug!(word = %word, "Unknown command");
            write_line(output, &self.matcher.message(&word)).await?;
            return Ok(None);
        };

        if command.is_exit() {
            self.save(output).await?;
            write_line(output, GOODBYE).await?;
            return Ok(Some(SessionEnd::Exit));
        }

        let ctx = self.context();
        let outcome = commands::dispatch(command, &args, &mut self.book, &ctx);
        write_line(output, &outcome.message).await?;
        if outcome.changed {
            self.save(output).await?;
        }
        Ok(None)
    }
}

async fn write_line<W>(output: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await
}
