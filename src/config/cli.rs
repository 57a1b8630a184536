use std::time::Duration;

use clap::{ArgAction, Parser};

/// Makes a GET request to URL and prints `<response_code> <result> <response_time_ms>` on one line.
///
/// Exits with 0 when the server answered 200, with 1 otherwise.
#[derive(Debug, Parser)]
#[command(name = "bb-monitor", version)]
pub struct Cli {
    /// URL to check
    pub url: String,

    /// Print the result as a JSON object
    #[arg(long)]
    pub json: bool,

    /// Request timeout in seconds, fractions allowed
    #[arg(long, value_name = "SECONDS", value_parser = parse_timeout)]
    pub timeout: Option<Duration>,

    /// Log diagnostics to stderr, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Parses a positive, finite number of seconds.
fn parse_timeout(value: &str) -> Result<Duration, String> {
    let seconds: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("`{value}` is not a number of seconds"))?;

    if seconds.is_nan() || seconds <= 0.0 {
        return Err(format!("timeout must be greater than 0, got {value}"));
    }

    Duration::try_from_secs_f64(seconds).map_err(|e| format!("invalid timeout `{value}`: {e}"))
}
