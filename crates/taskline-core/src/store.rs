//! Ordered, owned task storage for a session.

use crate::error::{Error, Result};
use crate::task::Task;

/// The session's task collection.
///
/// A dense ordered sequence: insertion order is display order is addressing
/// order. Offsets are validated before any mutation, so a failed call
/// leaves the list unchanged.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Number of tasks currently tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a task at the end of the list.
    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Tasks in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Borrow the tasks as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Set the completion marker of the task at a 0-based offset and return
    /// the updated task.
    pub fn set_done(&mut self, index: i64, done: bool) -> Result<&Task> {
        let offset = usize::try_from(index).map_err(|_| Error::IndexOutOfRange)?;
        let task = self.tasks.get_mut(offset).ok_or(Error::IndexOutOfRange)?;
        task.set_done(done);
        Ok(task)
    }

    /// Remove and return the task at a 0-based offset. Subsequent tasks
    /// shift down one position.
    pub fn remove(&mut self, index: i64) -> Result<Task> {
        let offset = usize::try_from(index).map_err(|_| Error::IndexOutOfRange)?;
        if offset >= self.tasks.len() {
            return Err(Error::IndexOutOfRange);
        }
        Ok(self.tasks.remove(offset))
    }

    /// Tasks whose description contains `query` as a case-sensitive
    /// substring, paired with their original 1-based list position.
    pub fn find<'a>(&'a self, query: &'a str) -> impl Iterator<Item = (usize, &'a Task)> {
        self.tasks
            .iter()
            .enumerate()
            .filter(move |(_, task)| task.description.contains(query))
            .map(|(offset, task)| (offset + 1, task))
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_tasks() -> TaskList {
        let mut tasks = TaskList::new();
        tasks.push(Task::todo("alpha"));
        tasks.push(Task::todo("beta"));
        tasks.push(Task::todo("gamma"));
        tasks
    }

    #[test]
    fn push_appends_in_order() {
        let tasks = three_tasks();
        let descriptions: Vec<&str> = tasks.iter().map(|task| task.description.as_str()).collect();
        assert_eq!(descriptions, ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn set_done_touches_only_the_addressed_task() -> Result<()> {
        let mut tasks = three_tasks();
        tasks.set_done(1, true)?;
        let done: Vec<bool> = tasks.iter().map(|task| task.done).collect();
        assert_eq!(done, [false, true, false]);
        Ok(())
    }

    #[test]
    fn out_of_range_offsets_leave_the_list_unchanged() {
        let mut tasks = three_tasks();
        let before = tasks.clone();
        assert_eq!(tasks.set_done(3, true), Err(Error::IndexOutOfRange));
        assert_eq!(tasks.set_done(-1, true), Err(Error::IndexOutOfRange));
        assert_eq!(tasks.remove(17), Err(Error::IndexOutOfRange));
        assert_eq!(tasks, before);
    }

    #[test]
    fn remove_shifts_subsequent_tasks_down() -> Result<()> {
        let mut tasks = three_tasks();
        let removed = tasks.remove(0)?;
        assert_eq!(removed.description, "alpha");
        assert_eq!(tasks.len(), 2);
        let descriptions: Vec<&str> = tasks.iter().map(|task| task.description.as_str()).collect();
        assert_eq!(descriptions, ["beta", "gamma"]);
        Ok(())
    }

    #[test]
    fn find_is_case_sensitive_and_numbered_by_position() {
        let mut tasks = TaskList::new();
        tasks.push(Task::todo("Team Meeting"));
        tasks.push(Task::todo("Buy groceries"));
        tasks.push(Task::todo("meeting notes"));

        let hits: Vec<(usize, &str)> = tasks
            .find("Meeting")
            .map(|(position, task)| (position, task.description.as_str()))
            .collect();
        assert_eq!(hits, [(1, "Team Meeting")]);

        let hits: Vec<usize> = tasks.find("eeting").map(|(position, _)| position).collect();
        assert_eq!(hits, [1, 3]);
    }
}
