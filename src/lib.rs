//! Daybook Library
//!
//! A console task manager for deadlines and events. Deadlines and events can
//! recur every N days up to a final date, duplicates are detected and
//! reported instead of re-added, and free time slots of a requested length
//! can be searched on any date.
//!
//! # Architecture
//!
//! - **Session Layer**: `Daybook` - parses a line, runs the command, saves on change
//! - **Command Layer**: `parser` and `commands` - grammar and per-command semantics
//! - **Domain Layer**: `tasks` - task model, ordered task list, record codec
//! - **Persistence Layer**: `storage` - one record per line in a text file
//!
//! # Example
//!
//! ```no_run
//! use daybook::Daybook;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut daybook = Daybook::new("daybook.txt", 7)?;
//!     let reply = daybook.handle_line("deadline essay /date 01/01/2019 /end 2359")?;
//!     println!("{}", reply);
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod date_utils;
pub mod formatting;
pub mod parser;
pub mod storage;
pub mod tasks;
pub mod validation;

use anyhow::Result;
use std::path::Path;
use tracing::{debug, warn};

pub use commands::{Command, CommandError, CommandResult};
pub use config::Config;
pub use parser::{CommandParser, ParserError, USAGE};
pub use storage::Storage;
pub use tasks::{Priority, Task, TaskKind, TaskList};

/// An interactive session over one data file
///
/// Holds the task list in memory and writes it back after every command that
/// changes it.
pub struct Daybook {
    tasks: TaskList,
    storage: Storage,
    parser: CommandParser,
}

impl Daybook {
    /// Open a session on a data file
    ///
    /// # Arguments
    /// * `data_file` - Path to the task data file; created on first save
    /// * `default_interval` - Recurrence interval used when `/interval` is omitted
    ///
    /// # Returns
    /// The session, or an error if the existing file cannot be read
    pub fn new(data_file: impl AsRef<Path>, default_interval: u32) -> Result<Self> {
        let storage = Storage::new(data_file);
        let tasks = storage.load()?;
        Ok(Self {
            tasks,
            storage,
            parser: CommandParser::new(default_interval),
        })
    }

    /// Open a session using the data file and defaults from a configuration
    pub fn open(config: &Config) -> Result<Self> {
        Self::new(&config.data_file, config.default_interval)
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Execute a parsed command, saving the list if it changed
    ///
    /// If the save fails the in-memory list is rolled back, so memory and the
    /// data file never disagree.
    pub fn execute(&mut self, command: &Command) -> Result<CommandResult> {
        let snapshot = self.tasks.clone();
        let result = command.execute(&mut self.tasks).inspect_err(|e| {
            warn!(command = command.name(), error = %e, "command failed");
        })?;

        if result.mutated() {
            if let Err(e) = self.storage.save(&self.tasks) {
                warn!(command = command.name(), error = %e, "save failed, rolling back");
                self.tasks = snapshot;
                return Err(e.context(format!("'{}' was not applied", command.name())));
            }
        } else {
            debug!(command = command.name(), "no changes, skipping save");
        }
        Ok(result)
    }

    /// Parse and execute one line of user input
    ///
    /// # Returns
    /// The message to show the user, or the parse/command/storage error
    pub fn handle_line(&mut self, line: &str) -> Result<String> {
        let command = self.parser.parse(line)?;
        Ok(self.execute(&command)?.into_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn session() -> (Daybook, TempDir) {
        let dir = TempDir::new().unwrap();
        let daybook = Daybook::new(dir.path().join("tasks.txt"), 7).unwrap();
        (daybook, dir)
    }

    #[test]
    fn test_mutating_command_is_saved() {
        let (mut daybook, dir) = session();
        daybook
            .handle_line("deadline essay /date 01/01/2019 /end 2359")
            .unwrap();

        let reopened = Daybook::new(dir.path().join("tasks.txt"), 7).unwrap();
        assert_eq!(reopened.tasks().len(), 1);
    }

    #[test]
    fn test_read_only_command_does_not_create_file() {
        let (mut daybook, dir) = session();
        daybook.handle_line("list").unwrap();
        assert!(!dir.path().join("tasks.txt").exists());
    }

    #[test]
    fn test_failed_save_rolls_back() {
        let dir = TempDir::new().unwrap();
        let mut daybook = Daybook::new(dir.path().join("missing").join("tasks.txt"), 7).unwrap();

        let err = daybook
            .handle_line("deadline essay /date 01/01/2019 /end 2359")
            .unwrap_err();
        assert!(err.to_string().contains("'deadline' was not applied"));
        assert!(daybook.tasks().is_empty());
    }

    #[test]
    fn test_errors_surface_as_messages() {
        let (mut daybook, _dir) = session();
        let err = daybook.handle_line("done 1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Task not found: no task has ID 1. Use list to see available tasks."
        );
        assert!(daybook.handle_line("frobnicate").is_err());
    }
}
