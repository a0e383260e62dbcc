use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::info;

use crate::store::{ContactStore, NO_NUMBER};

pub const COMMAND_PROMPT: &str = "Command (1 search, 2 add, 3 quit): ";
pub const NAME_PROMPT: &str = "Name: ";
pub const PHONE_PROMPT: &str = "Phone: ";

/// Observable states of the command loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    AwaitingCommand,
    Processing,
    Terminated,
}

/// Interactive session driving a [`ContactStore`] over line-oriented streams.
///
/// Generic over the reader and writer so the full prompt/response protocol
/// runs against in-memory buffers in tests exactly as it does on stdio.
pub struct Session<R, W> {
    input: R,
    output: W,
    store: ContactStore,
    state: LoopState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            store: ContactStore::new(),
            state: LoopState::AwaitingCommand,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// Run read-branch-print iterations until a quit command or EOF.
    pub fn run(&mut self) -> Result<()> {
        info!("session started");
        while self.state != LoopState::Terminated {
            self.step()?;
        }
        info!("session ended with {} contact(s)", self.store.len());
        Ok(())
    }

    /// One iteration: read a command, dispatch, print the outcome.
    fn step(&mut self) -> Result<()> {
        let command = match self.prompt_line(COMMAND_PROMPT)? {
            Some(line) => line,
            // EOF takes the same path as any unrecognized command.
            None => return self.quit(),
        };
        self.state = LoopState::Processing;

        match command.as_str() {
            "1" => self.search_command()?,
            "2" => self.add_command()?,
            // Permissive catch-all: "3", empty input and garbage all quit.
            other => {
                info!("quit on command '{}'", other);
                return self.quit();
            }
        }

        self.state = LoopState::AwaitingCommand;
        Ok(())
    }

    fn search_command(&mut self) -> Result<()> {
        let name = self.prompt_line(NAME_PROMPT)?.unwrap_or_default();
        // Queries are lowercased; add() stores names verbatim. See ContactStore.
        let name = name.to_lowercase();
        let result = self.store.search(&name).to_string();
        info!(
            "search for '{}': {}",
            name,
            if result == NO_NUMBER { "miss" } else { "hit" }
        );
        writeln!(self.output, "{}", result)?;
        Ok(())
    }

    fn add_command(&mut self) -> Result<()> {
        let name = self.prompt_line(NAME_PROMPT)?.unwrap_or_default();
        let phone = self.prompt_line(PHONE_PROMPT)?.unwrap_or_default();
        self.store.add(&name, &phone);
        writeln!(self.output, "ok!")?;
        Ok(())
    }

    fn quit(&mut self) -> Result<()> {
        writeln!(self.output, "quitting...")?;
        self.output.flush()?;
        self.state = LoopState::Terminated;
        Ok(())
    }

    /// Write `prompt` without a trailing newline, flush, and read one line
    /// with its line ending stripped. `None` on EOF.
    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}
