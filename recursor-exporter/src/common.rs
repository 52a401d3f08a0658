use std::io;
use std::process::ExitStatus;
use std::string::FromUtf8Error;
use std::time::Duration;

use thiserror::Error as ThisError;

/// Errors that abort a single scrape.
///
/// A scrape error never affects later scrapes: the next request starts from scratch.
#[derive(Debug, ThisError)]
pub enum ScrapeError {
    /// The control command could not be started at all.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        /// The command line that was attempted.
        command: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The control command ran but reported failure.
    #[error("`{command}` exited with {status}: {stderr}")]
    Exited {
        /// The command line that was run.
        command: String,
        /// Exit status of the process.
        status: ExitStatus,
        /// Trimmed standard error output of the process.
        stderr: String,
    },

    /// The control command produced output that is not valid UTF-8.
    #[error("`{command}` produced invalid output: {source}")]
    InvalidOutput {
        /// The command line that was run.
        command: String,
        /// The decoding error.
        #[source]
        source: FromUtf8Error,
    },

    /// The scrape did not complete within the configured timeout.
    #[error("scrape timed out after {0:?}")]
    TimedOut(Duration),

    /// The task running the scrape panicked or was cancelled.
    #[error("scrape aborted: {0}")]
    Aborted(String),
}

/// Errors that could occur while building the exporter.
#[derive(Debug, ThisError)]
pub enum BuildError {
    /// Binding/listening to the given address did not succeed.
    #[error("failed to create HTTP listener: {0}")]
    FailedToCreateHTTPListener(String),

    /// The given IP address or subnet for the allowlist could not be parsed.
    #[error("invalid allowlist address: {0}")]
    InvalidAllowlistAddress(String),

    /// The telemetry path does not start with `/`.
    #[error("invalid telemetry path: {0}")]
    InvalidTelemetryPath(String),
}
