//! Applies parsed commands to the task list and produces reply text.

use std::fmt::Write as _;

use crate::command::Command;
use crate::error::Result;
use crate::store::TaskList;
use crate::task::Task;

const FAREWELL: &str = "Goodbye. See you next time!";
const LIST_HEADER: &str = "Your tasks:";
const FIND_HEADER: &str = "Matching tasks:";

/// What the session loop should do after showing a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading input.
    Continue,
    /// Stop reading input; the session is over.
    Exit,
}

/// Outcome of one executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// User-facing message, newline-joined per logical line.
    pub message: String,
    /// Control signal for the session loop.
    pub flow: Flow,
}

impl Reply {
    fn show(message: String) -> Self {
        Self {
            message,
            flow: Flow::Continue,
        }
    }
}

/// Apply `command` to `tasks` and produce the reply to show.
///
/// Validation happens before any mutation, so a rejected command leaves the
/// list exactly as it was.
pub fn execute(command: Command, tasks: &mut TaskList) -> Result<Reply> {
    match command {
        Command::Exit => Ok(Reply {
            message: FAREWELL.to_owned(),
            flow: Flow::Exit,
        }),
        Command::List => Ok(Reply::show(render_list(tasks))),
        Command::Mark { index } => {
            let task = tasks.set_done(index, true)?;
            Ok(Reply::show(format!("Marked as done:\n  {task}")))
        }
        Command::Unmark { index } => {
            let task = tasks.set_done(index, false)?;
            Ok(Reply::show(format!("Marked as not done yet:\n  {task}")))
        }
        Command::AddTodo { description } => Ok(Reply::show(add(tasks, Task::todo(&description)))),
        Command::AddDeadline { description, due } => {
            Ok(Reply::show(add(tasks, Task::deadline(&description, due))))
        }
        Command::AddEvent { description, at } => {
            Ok(Reply::show(add(tasks, Task::event(&description, at))))
        }
        Command::Delete { index } => {
            let removed = tasks.remove(index)?;
            Ok(Reply::show(format!(
                "Removed this task:\n  {removed}\n{} in the list.",
                count_phrase(tasks.len())
            )))
        }
        Command::Find { query } => Ok(Reply::show(render_matches(tasks, &query))),
    }
}

fn add(tasks: &mut TaskList, task: Task) -> String {
    let rendered = task.to_string();
    tasks.push(task);
    format!(
        "Added this task:\n  {rendered}\n{} in the list.",
        count_phrase(tasks.len())
    )
}

fn count_phrase(count: usize) -> String {
    if count == 1 {
        "1 task".to_owned()
    } else {
        format!("{count} tasks")
    }
}

fn render_list(tasks: &TaskList) -> String {
    let mut message = LIST_HEADER.to_owned();
    for (position, task) in tasks.iter().enumerate() {
        let _ = write!(message, "\n{}. {task}", position + 1);
    }
    message
}

/// Matches keep their original list position so the numbers line up with
/// what `list` shows.
fn render_matches(tasks: &TaskList, query: &str) -> String {
    let mut message = FIND_HEADER.to_owned();
    for (position, task) in tasks.find(query) {
        let _ = write!(message, "\n{position}. {task}");
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::parser::parse;

    fn run(line: &str, tasks: &mut TaskList) -> Result<Reply> {
        execute(parse(line)?, tasks)
    }

    #[test]
    fn exit_signals_termination() -> Result<()> {
        let mut tasks = TaskList::new();
        let reply = run("bye", &mut tasks)?;
        assert_eq!(reply.flow, Flow::Exit);
        assert_eq!(reply.message, FAREWELL);
        Ok(())
    }

    #[test]
    fn add_reports_the_task_and_the_count() -> Result<()> {
        let mut tasks = TaskList::new();
        let reply = run("todo read book", &mut tasks)?;
        assert_eq!(reply.flow, Flow::Continue);
        assert_eq!(
            reply.message,
            "Added this task:\n  [T][ ] read book\n1 task in the list."
        );

        let reply = run("deadline report /by 2019/12/02 1800", &mut tasks)?;
        assert_eq!(
            reply.message,
            "Added this task:\n  [D][ ] report (by: 2019/12/02 1800)\n2 tasks in the list."
        );
        Ok(())
    }

    #[test]
    fn list_enumerates_in_store_order() -> Result<()> {
        let mut tasks = TaskList::new();
        run("todo alpha", &mut tasks)?;
        run("event sync /at 2019/06/06 1400", &mut tasks)?;
        let reply = run("list", &mut tasks)?;
        assert_eq!(
            reply.message,
            "Your tasks:\n1. [T][ ] alpha\n2. [E][ ] sync (at: 2019/06/06 1400)"
        );
        Ok(())
    }

    #[test]
    fn empty_list_renders_just_the_header() -> Result<()> {
        let mut tasks = TaskList::new();
        let reply = run("list", &mut tasks)?;
        assert_eq!(reply.message, LIST_HEADER);
        Ok(())
    }

    #[test]
    fn mark_and_unmark_echo_the_task() -> Result<()> {
        let mut tasks = TaskList::new();
        run("todo read book", &mut tasks)?;

        let reply = run("mark 1", &mut tasks)?;
        assert_eq!(reply.message, "Marked as done:\n  [T][X] read book");

        let reply = run("unmark 1", &mut tasks)?;
        assert_eq!(reply.message, "Marked as not done yet:\n  [T][ ] read book");
        Ok(())
    }

    #[test]
    fn index_errors_leave_the_list_unchanged() -> Result<()> {
        let mut tasks = TaskList::new();
        run("todo alpha", &mut tasks)?;
        let before = tasks.clone();

        for line in ["mark 2", "unmark 0", "delete 9", "mark -3"] {
            assert_eq!(run(line, &mut tasks), Err(Error::IndexOutOfRange), "line: {line:?}");
        }
        assert_eq!(tasks, before);
        Ok(())
    }

    #[test]
    fn delete_reports_the_removed_task_and_new_count() -> Result<()> {
        let mut tasks = TaskList::new();
        run("todo alpha", &mut tasks)?;
        run("todo beta", &mut tasks)?;

        let reply = run("delete 1", &mut tasks)?;
        assert_eq!(
            reply.message,
            "Removed this task:\n  [T][ ] alpha\n1 task in the list."
        );
        assert_eq!(tasks.len(), 1);
        Ok(())
    }

    #[test]
    fn find_numbers_matches_by_original_position() -> Result<()> {
        let mut tasks = TaskList::new();
        run("todo Buy groceries", &mut tasks)?;
        run("todo Team Meeting", &mut tasks)?;
        run("todo Meeting notes", &mut tasks)?;

        let reply = run("find Meeting", &mut tasks)?;
        assert_eq!(
            reply.message,
            "Matching tasks:\n2. [T][ ] Team Meeting\n3. [T][ ] Meeting notes"
        );
        Ok(())
    }

    #[test]
    fn find_without_matches_renders_just_the_header() -> Result<()> {
        let mut tasks = TaskList::new();
        run("todo alpha", &mut tasks)?;
        let reply = run("find zzz", &mut tasks)?;
        assert_eq!(reply.message, FIND_HEADER);
        Ok(())
    }
}
