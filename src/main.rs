use std::process::ExitCode;

pub mod config;
use config::{app_config::load_config, logging::init_logging};
pub mod http_check;
use http_check::{prelude::*, report_error_chain};
pub mod report;

/// Exit code when the check could not be carried out at all.
const UNEXPECTED_ERROR_EXIT: u8 = 3;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = load_config();
    init_logging(config.verbosity);

    tracing::info!(url = %config.url, timeout = ?config.timeout, output = ?config.output, "starting check");

    let result = match check(&config.url, config.timeout).await {
        Ok(result) => result,
        Err(err) => {
            tracing::debug!(url = %config.url, "check aborted");
            eprintln!("{}", report_error_chain(&err));
            return ExitCode::from(UNEXPECTED_ERROR_EXIT);
        }
    };

    tracing::info!(
        url = %result.url,
        response_code = ?result.response_code,
        response_time_ms = result.response_time_ms,
        "check finished"
    );

    match report::report(&result, config.output) {
        Ok(code) => code,
        Err(err) => {
            tracing::debug!("could not report result");
            eprintln!("{}", report_error_chain(&err));
            ExitCode::from(UNEXPECTED_ERROR_EXIT)
        }
    }
}
