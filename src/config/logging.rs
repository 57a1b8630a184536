use std::io::IsTerminal;

use tracing::level_filters::LevelFilter;

/// Map the number of `-v` flags to a log level.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the stderr logger. Standard output is reserved for the result line.
/// Colours are only used when stderr is a terminal.
pub fn init_logging(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_max_level(level_for(verbosity))
        .with_target(false)
        .try_init();
}
