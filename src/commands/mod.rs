//! Command model
//!
//! A `Command` is one user intent, built by the parser from a single input
//! line and executed once against the shared `TaskList`. Each variant wraps a
//! struct that keeps its arguments private and implements `execute`.
//!
//! Submodules:
//! - `deadline` / `event`: recurring insertion with duplicate suppression
//! - `find_free_slot`: free interval search on a date
//! - `done`, `delete`, `edit`, `reminder`: single-task updates
//! - `list`: read-only listing

mod deadline;
mod delete;
mod done;
mod edit;
mod event;
mod find_free_slot;
mod list;
mod reminder;

pub use deadline::{DeadlineCommand, MESSAGE_DEADLINE_ADDED};
pub use delete::DeleteCommand;
pub use done::DoneCommand;
pub use edit::EditCommand;
pub use event::{EventCommand, MESSAGE_EVENT_ADDED};
pub use find_free_slot::FindFreeSlotCommand;
pub use list::ListCommand;
pub use reminder::ReminderCommand;

use chrono::NaiveDate;
use tracing::debug;

use crate::date_utils;
use crate::formatting;
use crate::tasks::{Task, TaskList};

/// Notice emitted when a candidate task already exists
pub const MESSAGE_DUPLICATE_TASK: &str =
    "Looks like you already added this task before! Use the edit command on the task ID below:";

/// Outcome of a successfully executed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    message: String,
    mutated: bool,
}

impl CommandResult {
    pub fn new(message: impl Into<String>, mutated: bool) -> Self {
        Self {
            message: message.into(),
            mutated,
        }
    }

    /// Human-readable outcome
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the task list was changed and needs saving
    pub fn mutated(&self) -> bool {
        self.mutated
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

/// Errors raised while executing a command
///
/// Every variant is raised before the task list is modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// A business rule was violated (e.g. forbidden character in a description)
    #[error("{0}")]
    Validation(String),

    /// A date or time string could not be parsed
    #[error("Invalid {field} '{value}'. Use {expected}")]
    Parse {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// No task carries the given ID
    #[error("Task not found: no task has ID {0}. Use list to see available tasks.")]
    TaskNotFound(u32),
}

/// A user intent ready to run against the task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Deadline(DeadlineCommand),
    Event(EventCommand),
    FindFreeSlot(FindFreeSlotCommand),
    Done(DoneCommand),
    Delete(DeleteCommand),
    Edit(EditCommand),
    Reminder(ReminderCommand),
    List(ListCommand),
}

impl Command {
    /// Command word as typed by the user
    pub fn name(&self) -> &'static str {
        match self {
            Command::Deadline(_) => "deadline",
            Command::Event(_) => "event",
            Command::FindFreeSlot(_) => "findfreeslot",
            Command::Done(_) => "done",
            Command::Delete(_) => "delete",
            Command::Edit(_) => "edit",
            Command::Reminder(_) => "set-reminder",
            Command::List(_) => "list",
        }
    }

    /// Execute the command against the task list
    pub fn execute(&self, tasks: &mut TaskList) -> Result<CommandResult, CommandError> {
        debug!(command = self.name(), task_count = tasks.len(), "executing command");
        match self {
            Command::Deadline(cmd) => cmd.execute(tasks),
            Command::Event(cmd) => cmd.execute(tasks),
            Command::FindFreeSlot(cmd) => cmd.execute(tasks),
            Command::Done(cmd) => cmd.execute(tasks),
            Command::Delete(cmd) => cmd.execute(tasks),
            Command::Edit(cmd) => cmd.execute(tasks),
            Command::Reminder(cmd) => cmd.execute(tasks),
            Command::List(cmd) => cmd.execute(tasks),
        }
    }
}

/// Tally of a recurring insertion run
#[derive(Debug, Default)]
pub(crate) struct RecurringOutcome {
    pub(crate) notices: Vec<String>,
    pub(crate) added: usize,
    pub(crate) duplicates: usize,
}

impl RecurringOutcome {
    /// Build the command result; the list counts as mutated only if a task was added
    pub(crate) fn into_result(self, kind_name: &str, final_date: NaiveDate) -> CommandResult {
        if self.notices.is_empty() {
            return CommandResult::new(
                format!(
                    "No {} was added: every date is after the final date {}.",
                    kind_name,
                    date_utils::format_date(final_date)
                ),
                false,
            );
        }
        CommandResult::new(self.notices.join("\n\n"), self.added > 0)
    }
}

/// Insert one task per recurrence date, skipping duplicates
///
/// Start dates are expanded one after another, each stepping by `interval`
/// days up to and including `final_date`. The duplicate check runs against
/// the live list, so tasks added earlier in the same run also count.
///
/// # Arguments
/// * `tasks` - Task list to insert into
/// * `start_dates` - First date of each chain, in processing order
/// * `final_date` - Inclusive upper bound for every chain
/// * `interval` - Days between occurrences
/// * `added_header` - Notice line placed above each added task
/// * `build` - Creates the candidate task for a date
pub(crate) fn add_recurring(
    tasks: &mut TaskList,
    start_dates: &[NaiveDate],
    final_date: NaiveDate,
    interval: u32,
    added_header: &str,
    build: impl Fn(NaiveDate) -> Task,
) -> RecurringOutcome {
    let mut outcome = RecurringOutcome::default();

    for &start in start_dates {
        for date in date_utils::recurrence_dates(start, final_date, interval) {
            let candidate = build(date);

            if let Some(existing) = tasks.find_duplicate(&candidate) {
                debug!(existing_id = existing.id, date = %date, "skipping duplicate task");
                outcome.notices.push(format!(
                    "{}\n{}",
                    MESSAGE_DUPLICATE_TASK,
                    formatting::format_task(existing)
                ));
                outcome.duplicates += 1;
                continue;
            }

            let id = tasks.add(candidate);
            if let Some(task) = tasks.get(id) {
                outcome
                    .notices
                    .push(format!("{}\n{}", added_header, formatting::format_task(task)));
            }
            outcome.added += 1;
        }
    }

    outcome
}
