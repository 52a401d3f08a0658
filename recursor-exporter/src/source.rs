//! Acquisition of the raw statistics report.
use std::process::{Command, Stdio};

use tracing::debug;

use crate::common::ScrapeError;

/// A source of `key value` statistics reports.
///
/// Each call to [`fetch`](StatusSource::fetch) must return a fresh report. Implementations are
/// shared between concurrent scrapes.
#[cfg_attr(test, mockall::automock)]
pub trait StatusSource: Send + Sync {
    /// Fetches the full statistics report.
    ///
    /// ## Errors
    ///
    /// Any error is fatal for the scrape that requested the report.
    fn fetch(&self) -> Result<String, ScrapeError>;
}

/// Runs an external control command, such as `rec_control get-all`, and returns its standard
/// output.
#[derive(Clone, Debug)]
pub struct ControlCommand {
    program: String,
    args: Vec<String>,
}

impl ControlCommand {
    /// Creates a new `ControlCommand` that runs `program` with the given arguments.
    pub fn new<P, I, A>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self { program: program.into(), args: args.into_iter().map(Into::into).collect() }
    }

    /// Splits a command line on whitespace into a program and its arguments.
    ///
    /// Returns `None` if the command line is empty.
    pub fn from_command_line(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace();
        let program = parts.next()?;
        Some(Self::new(program, parts))
    }

    /// Gets the full command line, as used in log and error messages.
    pub fn command_line(&self) -> String {
        let mut command_line = self.program.clone();
        for arg in &self.args {
            command_line.push(' ');
            command_line.push_str(arg);
        }
        command_line
    }
}

impl Default for ControlCommand {
    fn default() -> Self {
        Self::new("rec_control", ["get-all"])
    }
}

impl StatusSource for ControlCommand {
    fn fetch(&self) -> Result<String, ScrapeError> {
        debug!(command = %self.command_line(), "running control command");

        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ScrapeError::Spawn { command: self.command_line(), source })?;

        if !output.status.success() {
            return Err(ScrapeError::Exited {
                command: self.command_line(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        String::from_utf8(output.stdout)
            .map_err(|source| ScrapeError::InvalidOutput { command: self.command_line(), source })
    }
}
