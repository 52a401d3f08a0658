//! Command line configuration.
use std::net::{AddrParseError, SocketAddr};
use std::num::ParseIntError;
use std::time::Duration;

use getopts::{Matches, Options};
use thiserror::Error as ThisError;

use crate::exporter::builder::DEFAULT_PORT;
use crate::source::ControlCommand;

const DEFAULT_CONTROL_COMMAND: &str = "rec_control get-all";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors that could occur while reading the command line.
#[derive(Debug, ThisError)]
pub enum ConfigError {
    /// The arguments did not match the known options.
    #[error("failed to parse command line args: {0}")]
    Options(#[from] getopts::Fail),

    /// The listen address is not a valid socket address.
    #[error("invalid listen address `{address}`: {source}")]
    ListenAddress {
        /// The rejected value.
        address: String,
        /// The parse error.
        #[source]
        source: AddrParseError,
    },

    /// The timeout is not a whole number of seconds.
    #[error("invalid timeout `{timeout}`: {source}")]
    Timeout {
        /// The rejected value.
        timeout: String,
        /// The parse error.
        #[source]
        source: ParseIntError,
    },

    /// The control command is empty.
    #[error("control command must not be empty")]
    EmptyControlCommand,
}

/// Settings for running the exporter.
#[derive(Clone, Debug)]
pub struct Config {
    /// Address the scrape endpoint listens on.
    pub listen_address: SocketAddr,
    /// Path that triggers a scrape.
    pub telemetry_path: String,
    /// Command that prints the resolver statistics.
    pub control_command: ControlCommand,
    /// IP addresses or subnets allowed to scrape; empty allows everyone.
    pub allowed_addresses: Vec<String>,
    /// How long a scrape may take; `None` waits forever.
    pub scrape_timeout: Option<Duration>,
    /// Whether or not to log at debug level.
    pub debug: bool,
}

impl Config {
    /// Reads the configuration from parsed options.
    ///
    /// ## Errors
    ///
    /// If any option value is invalid, an error variant will be returned describing the error.
    pub fn from_matches(matches: &Matches) -> Result<Self, ConfigError> {
        let listen_address = match matches.opt_str("listen-address") {
            Some(address) => address
                .parse()
                .map_err(|source| ConfigError::ListenAddress { address, source })?,
            None => SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        };

        let command_line =
            matches.opt_str("control-command").unwrap_or_else(|| DEFAULT_CONTROL_COMMAND.to_owned());
        let control_command = ControlCommand::from_command_line(&command_line)
            .ok_or(ConfigError::EmptyControlCommand)?;

        let scrape_timeout = match matches.opt_str("timeout") {
            Some(timeout) => {
                let secs = timeout
                    .parse::<u64>()
                    .map_err(|source| ConfigError::Timeout { timeout, source })?;
                Some(secs)
            }
            None => Some(DEFAULT_TIMEOUT_SECS),
        }
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs);

        Ok(Config {
            listen_address,
            telemetry_path: matches
                .opt_str("telemetry-path")
                .unwrap_or_else(|| "/metrics".to_owned()),
            control_command,
            allowed_addresses: matches.opt_strs("allow"),
            scrape_timeout,
            debug: matches.opt_present("debug"),
        })
    }
}

/// Builds the set of accepted command line options.
pub fn opts() -> Options {
    let mut opts = Options::new();

    opts.optopt(
        "l",
        "listen-address",
        "address to expose metrics on (default: 0.0.0.0:9199)",
        "ADDR",
    );
    opts.optopt("p", "telemetry-path", "path under which to expose metrics (default: /metrics)", "PATH");
    opts.optopt(
        "c",
        "control-command",
        "command that prints the resolver statistics (default: rec_control get-all)",
        "COMMAND",
    );
    opts.optmulti("a", "allow", "IP address or subnet allowed to scrape; repeatable", "NET");
    opts.optopt("t", "timeout", "scrape timeout in seconds, 0 to disable (default: 10)", "SECONDS");
    opts.optflag("d", "debug", "enable debug logging");
    opts.optflag("h", "help", "print this help menu");

    opts
}

/// Renders the usage text for the given program name.
pub fn usage(program: &str, opts: &Options) -> String {
    let brief = format!("Usage: {} [options]", program);
    opts.usage(&brief)
}
