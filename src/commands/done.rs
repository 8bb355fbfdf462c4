//! Done command: mark a task as completed

use tracing::info;

use crate::commands::{CommandError, CommandResult};
use crate::formatting;
use crate::tasks::TaskList;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoneCommand {
    id: u32,
}

impl DoneCommand {
    pub fn new(id: u32) -> Self {
        Self { id }
    }

    pub fn execute(&self, tasks: &mut TaskList) -> Result<CommandResult, CommandError> {
        let task = tasks
            .get_mut(self.id)
            .ok_or(CommandError::TaskNotFound(self.id))?;

        if task.is_done {
            return Ok(CommandResult::new(
                format!("Task {} is already marked as done.", self.id),
                false,
            ));
        }

        task.mark_as_done();
        info!(id = self.id, "task marked as done");
        Ok(CommandResult::new(
            format!(
                "Nice! I've marked this task as done:\n{}",
                formatting::format_task(task)
            ),
            true,
        ))
    }
}
