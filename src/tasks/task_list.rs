use crate::tasks::task::Task;

/// The ordered collection every command operates on
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    /// All tasks in insertion order
    ///
    /// Vec keeps the order stable for listing and for the record file, and the
    /// collection stays small enough that linear scans are fine.
    tasks: Vec<Task>,

    /// Counter for generating task IDs
    task_counter: u32,
}

impl TaskList {
    /// Create a new empty task list
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new unique task ID
    fn generate_task_id(&mut self) -> u32 {
        self.task_counter += 1;
        self.task_counter
    }

    /// Add a task to the end of the list
    ///
    /// The task's `id` is overwritten with a freshly generated one.
    ///
    /// # Returns
    /// The ID assigned to the task
    pub fn add(&mut self, mut task: Task) -> u32 {
        let id = self.generate_task_id();
        task.id = id;
        self.tasks.push(task);
        id
    }

    /// All tasks in insertion order
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Find a task by its ID
    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Find a task by its ID and return a mutable reference
    pub fn get_mut(&mut self, id: u32) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Remove a task from the list and return it
    ///
    /// # Returns
    /// The removed task if found
    pub fn remove(&mut self, id: u32) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(pos))
    }

    /// Find an existing task that `candidate` would duplicate
    ///
    /// # Returns
    /// The first matching task in insertion order
    pub fn find_duplicate(&self, candidate: &Task) -> Option<&Task> {
        self.tasks.iter().find(|t| candidate.is_duplicate_of(t))
    }
}
