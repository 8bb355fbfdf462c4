//! Delete command: remove a task from the list

use tracing::info;

use crate::commands::{CommandError, CommandResult};
use crate::formatting;
use crate::tasks::TaskList;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    id: u32,
}

impl DeleteCommand {
    pub fn new(id: u32) -> Self {
        Self { id }
    }

    pub fn execute(&self, tasks: &mut TaskList) -> Result<CommandResult, CommandError> {
        let removed = tasks
            .remove(self.id)
            .ok_or(CommandError::TaskNotFound(self.id))?;

        info!(id = self.id, remaining = tasks.len(), "task deleted");
        Ok(CommandResult::new(
            format!(
                "Noted. I've removed this task:\n{}\nYou now have {} task(s) in the list.",
                formatting::format_task(&removed),
                tasks.len()
            ),
            true,
        ))
    }
}
