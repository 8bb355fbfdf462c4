//! Event command: add an event with a start and end time, optionally recurring

use tracing::info;

use crate::commands::{CommandError, CommandResult, add_recurring};
use crate::date_utils;
use crate::tasks::{Priority, Task, TaskList};
use crate::validation;

/// Notice placed above each event that was added
pub const MESSAGE_EVENT_ADDED: &str = "The following event was added:";

/// Add an event on each start date and on every `interval` days after it,
/// up to and including the final date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCommand {
    description: String,
    priority: Priority,
    start_dates: Vec<String>,
    start_time: String,
    end_time: String,
    final_date: String,
    interval: u32,
}

impl EventCommand {
    pub fn new(
        description: impl Into<String>,
        priority: Priority,
        start_dates: Vec<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        final_date: impl Into<String>,
        interval: u32,
    ) -> Self {
        Self {
            description: description.into(),
            priority,
            start_dates,
            start_time: start_time.into(),
            end_time: end_time.into(),
            final_date: final_date.into(),
            interval,
        }
    }

    pub fn execute(&self, tasks: &mut TaskList) -> Result<CommandResult, CommandError> {
        validation::validate_description(&self.description)?;
        validation::validate_interval(self.interval)?;
        validation::validate_start_dates(&self.start_dates)?;

        let final_date = date_utils::parse_date(&self.final_date)?;
        let start_dates = self
            .start_dates
            .iter()
            .map(|s| date_utils::parse_date(s))
            .collect::<Result<Vec<_>, _>>()?;
        let start_time = date_utils::parse_time(&self.start_time)?;
        let end_time = date_utils::parse_time(&self.end_time)?;
        validation::validate_time_window(start_time, end_time)?;

        info!(
            description = %self.description,
            start_dates = start_dates.len(),
            final_date = %final_date,
            interval = self.interval,
            "executing event command"
        );

        let outcome = add_recurring(
            tasks,
            &start_dates,
            final_date,
            self.interval,
            MESSAGE_EVENT_ADDED,
            |date| {
                Task::event(
                    self.description.as_str(),
                    self.priority,
                    date,
                    start_time,
                    end_time,
                )
            },
        );

        Ok(outcome.into_result("event", final_date))
    }
}
