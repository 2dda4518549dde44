//! The read-eval-print loop wiring the core engine to console I/O.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use taskline_core::{Flow, TaskList, execute, parse};
use tracing::debug;

use crate::storage::TaskFile;
use crate::ui::{self, Frame};

const ALERT: &str = "OOPS! ";

/// One interactive session: the task list, rendering settings, and an
/// optional backing file.
pub struct Session {
    tasks: TaskList,
    frame: Frame,
    banner: bool,
    store: Option<TaskFile>,
}

impl Session {
    /// Create a session over an already-loaded task list.
    #[must_use]
    pub const fn new(tasks: TaskList, frame: Frame, banner: bool, store: Option<TaskFile>) -> Self {
        Self {
            tasks,
            frame,
            banner,
            store,
        }
    }

    /// Drive the loop until `bye` or end of input.
    ///
    /// Every line is parsed and executed to completion before the next one
    /// is read. Command failures are shown and the loop continues; only I/O
    /// failures (console or data file) abort the session.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        if self.banner {
            self.show(&mut output, ui::GREETING)?;
        }
        writeln!(output, "{}", ui::PROMPT)?;

        for line in input.lines() {
            let line = line.context("failed to read input")?;
            let (message, flow) = self.process(&line)?;
            self.show(&mut output, &message)?;
            if flow == Flow::Exit {
                return Ok(());
            }
            writeln!(output, "{}", ui::PROMPT)?;
        }

        // End of input behaves like `bye` so piped sessions still say goodbye.
        let (farewell, _) = self.process("bye")?;
        self.show(&mut output, &farewell)
    }

    /// Parse and execute one line, producing the text to show and the
    /// control signal for the loop.
    fn process(&mut self, line: &str) -> Result<(String, Flow)> {
        let command = match parse(line) {
            Ok(command) => command,
            Err(err) => {
                debug!(%err, line, "rejected input");
                return Ok((format!("{ALERT}{err}"), Flow::Continue));
            }
        };
        debug!(?command, "parsed command");

        let mutates = command.mutates();
        match execute(command, &mut self.tasks) {
            Ok(reply) => {
                if mutates {
                    self.persist()?;
                }
                Ok((reply.message, reply.flow))
            }
            Err(err) => {
                debug!(%err, line, "rejected command");
                Ok((format!("{ALERT}{err}"), Flow::Continue))
            }
        }
    }

    fn persist(&self) -> Result<()> {
        match &self.store {
            Some(store) => store.save(&self.tasks),
            None => Ok(()),
        }
    }

    fn show(&self, output: &mut impl Write, message: &str) -> Result<()> {
        writeln!(output, "{}", self.frame.wrap(message)).context("failed to write output")
    }
}
