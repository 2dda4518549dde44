use thiserror::Error;

/// Failures produced while parsing or executing a user command.
///
/// Every variant is a recoverable user-input error. The session loop shows
/// the message and keeps reading; nothing here terminates the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The line did not start with any known keyword.
    #[error(
        "I don't recognize that command. Try `list`, `todo`, `deadline`, `event`, `mark`, `unmark`, `delete`, `find`, or `bye`."
    )]
    UnknownCommand,

    /// A task index argument was not an integer.
    #[error("That needs a task number. Use `list` to see the tasks and their numbers.")]
    InvalidNumber,

    /// A task index pointed outside the current list.
    #[error("There is no task with that number.")]
    IndexOutOfRange,

    /// `todo` was given an empty description.
    #[error("Please give the new task a name.")]
    MissingTaskName,

    /// `deadline`/`event` input did not split into a name and a time.
    #[error("Both a name and a time are required. {usage}")]
    InvalidNameOrDate {
        /// Usage hint for the offending command.
        usage: &'static str,
    },

    /// A date-time literal did not match the fixed pattern.
    #[error("Times must look like `2019/12/02 1800` (YYYY/MM/DD HHMM, 24-hour).")]
    InvalidDateFormat,

    /// `find` was given an empty query.
    #[error("Please give me a word to search for.")]
    MissingSearchTerm,
}

/// Convenience alias for core results.
pub type Result<T> = std::result::Result<T, Error>;
