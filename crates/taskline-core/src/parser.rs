//! Turns one raw input line into a typed [`Command`].

use chrono::NaiveDateTime;

use crate::command::Command;
use crate::datetime;
use crate::error::{Error, Result};

const USAGE_DEADLINE: &str = "Try `deadline <name> /by <YYYY/MM/DD HHMM>`.";
const USAGE_EVENT: &str = "Try `event <name> /at <YYYY/MM/DD HHMM>`.";

/// Classify one input line by its leading keyword and parse the payload.
///
/// Keywords are checked in a fixed priority order and the first matching
/// prefix wins. The payload is the remainder of the line after the keyword,
/// trimmed of surrounding whitespace. `bye` is matched case-insensitively
/// after trimming; `list` is matched case-insensitively but exactly.
pub fn parse(line: &str) -> Result<Command> {
    if line.trim().eq_ignore_ascii_case("bye") {
        return Ok(Command::Exit);
    }
    if line.eq_ignore_ascii_case("list") {
        return Ok(Command::List);
    }
    // `unmark ...` never reaches the `mark` arm: prefix checks anchor the
    // full keyword token at position 0.
    if let Some(payload) = line.strip_prefix("mark") {
        return Ok(Command::Mark {
            index: parse_index(payload)?,
        });
    }
    if let Some(payload) = line.strip_prefix("unmark") {
        return Ok(Command::Unmark {
            index: parse_index(payload)?,
        });
    }
    if let Some(payload) = line.strip_prefix("todo") {
        let description = required(payload, Error::MissingTaskName)?;
        return Ok(Command::AddTodo { description });
    }
    if let Some(payload) = line.strip_prefix("deadline") {
        let (description, due) = parse_dated(payload, "/by", USAGE_DEADLINE)?;
        return Ok(Command::AddDeadline { description, due });
    }
    if let Some(payload) = line.strip_prefix("event") {
        let (description, at) = parse_dated(payload, "/at", USAGE_EVENT)?;
        return Ok(Command::AddEvent { description, at });
    }
    if let Some(payload) = line.strip_prefix("delete") {
        return Ok(Command::Delete {
            index: parse_index(payload)?,
        });
    }
    if let Some(payload) = line.strip_prefix("find") {
        let query = required(payload, Error::MissingSearchTerm)?;
        return Ok(Command::Find { query });
    }
    Err(Error::UnknownCommand)
}

/// A 1-based task number, decremented to a 0-based offset. Bounds are not
/// checked here.
fn parse_index(payload: &str) -> Result<i64> {
    let number: i64 = payload.trim().parse().map_err(|_| Error::InvalidNumber)?;
    Ok(number.saturating_sub(1))
}

fn required(payload: &str, missing: Error) -> Result<String> {
    let trimmed = payload.trim();
    if trimmed.is_empty() {
        return Err(missing);
    }
    Ok(trimmed.to_owned())
}

/// Split a `deadline`/`event` payload on the literal separator token.
///
/// The split is a plain substring split on purpose: a description that
/// itself contains the separator splits incorrectly, matching the reference
/// behavior. Do not upgrade this to a tokenizing grammar.
fn parse_dated(
    payload: &str,
    separator: &str,
    usage: &'static str,
) -> Result<(String, NaiveDateTime)> {
    let parts: Vec<&str> = payload.split(separator).collect();
    let [description, when] = parts.as_slice() else {
        return Err(Error::InvalidNameOrDate { usage });
    };
    let description = description.trim();
    let when = when.trim();
    if description.is_empty() || when.is_empty() {
        return Err(Error::InvalidNameOrDate { usage });
    }
    Ok((description.to_owned(), datetime::parse(when)?))
}
