//! Reminder command: switch a task's reminder on or off

use crate::commands::{CommandError, CommandResult};
use crate::tasks::TaskList;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderCommand {
    id: u32,
    enabled: bool,
}

impl ReminderCommand {
    pub fn new(id: u32, enabled: bool) -> Self {
        Self { id, enabled }
    }

    pub fn execute(&self, tasks: &mut TaskList) -> Result<CommandResult, CommandError> {
        let task = tasks
            .get_mut(self.id)
            .ok_or(CommandError::TaskNotFound(self.id))?;

        let state = if self.enabled { "on" } else { "off" };
        if task.has_reminder == self.enabled {
            return Ok(CommandResult::new(
                format!("Reminder for task {} is already {}.", self.id, state),
                false,
            ));
        }

        task.has_reminder = self.enabled;
        Ok(CommandResult::new(
            format!("Reminder for task {} is now {}.", self.id, state),
            true,
        ))
    }
}
