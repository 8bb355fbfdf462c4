//! Edit command: change fields of an existing task

use tracing::info;

use crate::commands::{CommandError, CommandResult};
use crate::date_utils;
use crate::formatting;
use crate::tasks::{Priority, TaskKind, TaskList};
use crate::validation;

/// Replace selected fields of a task; fields left as `None` are kept
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditCommand {
    id: u32,
    description: Option<String>,
    date: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
    priority: Option<Priority>,
}

impl EditCommand {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = Some(start_time.into());
        self
    }

    pub fn with_end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = Some(end_time.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.date.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.priority.is_none()
    }

    /// Apply the edit
    ///
    /// The edited task is built and checked as a copy; the stored task is only
    /// replaced once every field is valid.
    pub fn execute(&self, tasks: &mut TaskList) -> Result<CommandResult, CommandError> {
        if self.is_empty() {
            return Err(CommandError::Validation(
                "Nothing to edit. Provide at least one of /description, /date, /start, /end, /priority."
                    .to_string(),
            ));
        }
        if let Some(ref description) = self.description {
            validation::validate_description(description)?;
        }
        let date = self
            .date
            .as_deref()
            .map(date_utils::parse_date)
            .transpose()?;
        let start_time = self
            .start_time
            .as_deref()
            .map(date_utils::parse_time)
            .transpose()?;
        let end_time = self
            .end_time
            .as_deref()
            .map(date_utils::parse_time)
            .transpose()?;

        let current = tasks
            .get(self.id)
            .ok_or(CommandError::TaskNotFound(self.id))?;
        let mut edited = current.clone();

        let not_applicable = |field: &str| {
            CommandError::Validation(format!(
                "A {} has no {}; task {} was not changed.",
                current.kind.name(),
                field,
                self.id
            ))
        };
        match current.kind {
            TaskKind::Todo if date.is_some() => return Err(not_applicable("date")),
            TaskKind::Todo | TaskKind::Deadline if start_time.is_some() => {
                return Err(not_applicable("start time"));
            }
            TaskKind::Todo if end_time.is_some() => return Err(not_applicable("end time")),
            _ => {}
        }

        if let Some(ref description) = self.description {
            edited.description = description.clone();
        }
        if let Some(priority) = self.priority {
            edited.priority = priority;
        }
        if date.is_some() {
            edited.main_date = date;
        }
        if start_time.is_some() {
            edited.start_time = start_time;
        }
        if end_time.is_some() {
            edited.end_time = end_time;
        }

        if edited.kind == TaskKind::Event
            && let (Some(start), Some(end)) = (edited.start_time, edited.end_time)
        {
            validation::validate_time_window(start, end)?;
        }

        let rendered = formatting::format_task(&edited);
        if let Some(task) = tasks.get_mut(self.id) {
            *task = edited;
        }

        info!(id = self.id, "task edited");
        Ok(CommandResult::new(
            format!("Task {} updated:\n{}", self.id, rendered),
            true,
        ))
    }
}
