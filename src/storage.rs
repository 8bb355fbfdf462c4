//! Line-oriented persistence of the task list
//!
//! The data file holds one task record per line (see `tasks::to_record`).
//! A missing file is an empty list; blank lines are ignored on load.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::tasks::{TaskList, from_record, to_record};

pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load every record from the data file
    ///
    /// Tasks get fresh sequential IDs in file order. A malformed line fails the
    /// whole load and the error names the line.
    pub fn load(&self) -> Result<TaskList> {
        if !self.file_path.exists() {
            info!(path = %self.file_path.display(), "data file not found, starting empty");
            return Ok(TaskList::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("failed to read {}", self.file_path.display()))?;

        let mut tasks = TaskList::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let task = from_record(line).with_context(|| {
                format!(
                    "{}:{}: malformed task record '{}'",
                    self.file_path.display(),
                    index + 1,
                    line
                )
            })?;
            tasks.add(task);
        }

        info!(path = %self.file_path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    /// Overwrite the data file with the current list
    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        let mut content = String::new();
        for task in tasks.all() {
            content.push_str(&to_record(task));
            content.push('\n');
        }

        fs::write(&self.file_path, content)
            .with_context(|| format!("failed to write {}", self.file_path.display()))?;
        debug!(path = %self.file_path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::{Priority, Task};
    use chrono::{NaiveDate, NaiveTime};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("absent.txt"));
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("tasks.txt"));

        let mut tasks = TaskList::new();
        tasks.add(Task::todo("read", Priority::medium));
        tasks.add(Task::deadline(
            "Test content",
            Priority::high,
            NaiveDate::from_ymd_opt(2019, 10, 1).unwrap(),
            NaiveTime::from_hms_opt(12, 30, 0).unwrap(),
        ));
        storage.save(&tasks).unwrap();

        let content = fs::read_to_string(storage.file_path()).unwrap();
        assert!(content.contains("D_Test content_false_high_01/10/2019_-_1230_false\n"));

        let loaded = storage.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.all()[1].description, "Test content");
        assert_eq!(loaded.all()[1].id, 2);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(&path, "T_read_false_low_-_-_-_false\n\n   \nT_write_true_low_-_-_-_false\n").unwrap();

        let loaded = Storage::new(&path).load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert!(loaded.all()[1].is_done);
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.txt");
        fs::write(&path, "T_read_false_low_-_-_-_false\nnot a record\n").unwrap();

        let err = Storage::new(&path).load().unwrap_err();
        assert!(format!("{:#}", err).contains(":2: malformed task record"));
    }
}
