use chrono::NaiveDateTime;

/// A validated, typed representation of one user input line.
///
/// Index payloads are already decremented to 0-based offsets at parse time
/// but are only checked for numeric form there; bounds are validated at
/// execution time against the current list length, which is why they stay
/// signed (`mark 0` yields offset `-1` and fails the bounds check).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// End the session.
    Exit,
    /// Render every task in store order.
    List,
    /// Mark the task at `index` as done.
    Mark {
        /// 0-based task offset.
        index: i64,
    },
    /// Mark the task at `index` as not done.
    Unmark {
        /// 0-based task offset.
        index: i64,
    },
    /// Append an undated task.
    AddTodo {
        /// Task description, trimmed and non-empty.
        description: String,
    },
    /// Append a task with a due date.
    AddDeadline {
        /// Task description, trimmed and non-empty.
        description: String,
        /// When the task is due.
        due: NaiveDateTime,
    },
    /// Append a task happening at a point in time.
    AddEvent {
        /// Task description, trimmed and non-empty.
        description: String,
        /// When the task takes place.
        at: NaiveDateTime,
    },
    /// Remove the task at `index`.
    Delete {
        /// 0-based task offset.
        index: i64,
    },
    /// Render tasks whose description contains `query`.
    Find {
        /// Case-sensitive substring to look for.
        query: String,
    },
}

impl Command {
    /// Whether executing this command can change the task list.
    ///
    /// The shell uses this to decide when to persist.
    #[must_use]
    pub const fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Mark { .. }
                | Self::Unmark { .. }
                | Self::AddTodo { .. }
                | Self::AddDeadline { .. }
                | Self::AddEvent { .. }
                | Self::Delete { .. }
        )
    }
}
