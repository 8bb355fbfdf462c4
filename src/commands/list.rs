//! List command: show every task in insertion order

use crate::commands::{CommandError, CommandResult};
use crate::formatting;
use crate::tasks::TaskList;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, tasks: &TaskList) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::new(
            formatting::format_tasks(tasks.all()),
            false,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::{Priority, Task};

    #[test]
    fn test_list_tasks() {
        let mut tasks = TaskList::new();
        tasks.add(Task::todo("first", Priority::low));
        tasks.add(Task::todo("second", Priority::high));

        let result = ListCommand::new().execute(&tasks).unwrap();
        assert!(!result.mutated());
        assert!(result.message().starts_with("Found 2 task(s):"));
        let first = result.message().find("#1 first").unwrap();
        let second = result.message().find("#2 second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_list_empty() {
        let result = ListCommand::new().execute(&TaskList::new()).unwrap();
        assert_eq!(result.message(), "No tasks found");
    }
}
