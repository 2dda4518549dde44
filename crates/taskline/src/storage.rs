//! JSON persistence for the task list.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use taskline_core::{Task, TaskList};

/// Loads and saves the task list as a JSON array of tasks.
#[derive(Debug, Clone)]
pub struct TaskFile {
    path: PathBuf,
}

impl TaskFile {
    /// Persist tasks at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted list. A missing file yields an empty list; a
    /// corrupt file is an error rather than a silent reset.
    pub fn load(&self) -> Result<TaskList> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(TaskList::new()),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", self.path.display()));
            }
        };
        let tasks: Vec<Task> = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        Ok(TaskList::from(tasks))
    }

    /// Write the current list back to disk.
    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        let payload =
            serde_json::to_string_pretty(tasks.as_slice()).context("failed to serialize tasks")?;
        fs::write(&self.path, payload)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}
