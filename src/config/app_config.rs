use std::time::Duration;

use clap::Parser;

use super::cli::Cli;
use crate::report::OutputFormat;

/// Everything one run of the checker needs.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckConfig {
    /// The URL to request, passed through untouched.
    pub url: String,

    /// Upper bound for the whole request. `None` waits indefinitely.
    pub timeout: Option<Duration>,

    /// Text or JSON result line.
    pub output: OutputFormat,

    /// Number of `-v` flags given.
    pub verbosity: u8,
}

impl From<Cli> for CheckConfig {
    fn from(cli: Cli) -> Self {
        CheckConfig {
            url: cli.url,
            timeout: cli.timeout,
            output: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            verbosity: cli.verbose,
        }
    }
}

/// Load the run configuration from the command line.
/// Invalid arguments print a usage message and exit with code 2 before anything else happens.
pub fn load_config() -> CheckConfig {
    Cli::parse().into()
}
