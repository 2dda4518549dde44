//! Command parsing and task-list mutation engine for taskline.
//!
//! The shell feeds one raw input line at a time into [`parse`], applies the
//! resulting [`Command`] to a [`TaskList`] via [`execute`], and shows the
//! returned [`Reply`] to the user. Everything here is synchronous and free
//! of I/O; rendering the reply (borders, prompts) is the shell's job.

/// Typed command values produced by the parser.
pub mod command;
/// Fixed-format date-time codec.
pub mod datetime;
/// User-input error taxonomy.
pub mod error;
/// Command execution against the task list.
pub mod executor;
/// Line parsing into typed commands.
pub mod parser;
/// Ordered task storage.
pub mod store;
/// Task entity and its rendering.
pub mod task;

pub use command::Command;
pub use error::{Error, Result};
pub use executor::{Flow, Reply, execute};
pub use parser::parse;
pub use store::TaskList;
pub use task::{Task, TaskKind};
