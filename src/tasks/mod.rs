//! Task domain model
//!
//! Submodules:
//! - `task`: the task record, its variants and priority
//! - `task_list`: the ordered collection shared by all commands
//! - `record`: line record encoding/decoding used by storage

mod record;
mod task;
mod task_list;

pub use record::{RecordError, SEPARATOR, from_record, to_record};
pub use task::{ABSENT_FIELD, Priority, Task, TaskKind};
pub use task_list::TaskList;
