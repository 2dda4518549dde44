use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::datetime;

/// A trackable unit of work.
///
/// Tasks are created exclusively by a successful parse of a `todo`,
/// `deadline`, or `event` line, live in a [`crate::TaskList`], and are
/// addressed by their 1-based list position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// What needs doing. Trimmed at creation, never all-whitespace.
    pub description: String,
    /// Completion marker, flipped by `mark`/`unmark`.
    #[serde(default)]
    pub done: bool,
    /// Variant payload distinguishing plain todos from dated tasks.
    #[serde(flatten)]
    pub kind: TaskKind,
}

/// Variant payloads for the three task shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskKind {
    /// An undated task.
    Todo,
    /// A task that is due by a point in time.
    Deadline {
        /// When the task is due.
        #[serde(with = "datetime::stamp")]
        due: NaiveDateTime,
    },
    /// A task that happens at a point in time.
    Event {
        /// When the task takes place.
        #[serde(with = "datetime::stamp")]
        at: NaiveDateTime,
    },
}

impl Task {
    /// Create an undated task.
    #[must_use]
    pub fn todo(description: &str) -> Self {
        Self::new(description, TaskKind::Todo)
    }

    /// Create a task due at `due`.
    #[must_use]
    pub fn deadline(description: &str, due: NaiveDateTime) -> Self {
        Self::new(description, TaskKind::Deadline { due })
    }

    /// Create a task taking place at `at`.
    #[must_use]
    pub fn event(description: &str, at: NaiveDateTime) -> Self {
        Self::new(description, TaskKind::Event { at })
    }

    fn new(description: &str, kind: TaskKind) -> Self {
        Self {
            description: description.trim().to_owned(),
            done: false,
            kind,
        }
    }

    /// Set the completion marker.
    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    const fn type_glyph(&self) -> char {
        match self.kind {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    const fn done_glyph(&self) -> char {
        if self.done { 'X' } else { ' ' }
    }
}

impl fmt::Display for Task {
    /// `[<type>][<done>] <description>` plus the date suffix for dated tasks.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.type_glyph(),
            self.done_glyph(),
            self.description
        )?;
        match self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { due } => write!(f, " (by: {})", datetime::format(due)),
            TaskKind::Event { at } => write!(f, " (at: {})", datetime::format(at)),
        }
    }
}
