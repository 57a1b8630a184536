use std::fmt;
use std::io::{self, Write};
use std::process::ExitCode;

use serde::Serialize;
use thiserror::Error;

use crate::http_check::result::RequestResult;

pub mod json;
pub mod text;

/// Exit code for a check that did not return HTTP 200.
pub const CHECK_FAILED_EXIT: u8 = 1;

/// How the result line is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// `OK` for a 200 response, `NOK` for anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "NOK")]
    Nok,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Ok => f.write_str("OK"),
            Verdict::Nok => f.write_str("NOK"),
        }
    }
}

/// What ends up on standard output. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitoringOutput<'a> {
    pub url: &'a str,
    pub response_code: Option<u16>,
    pub result: Verdict,
    pub response_time_ms: f64,
}

impl<'a> From<&'a RequestResult> for MonitoringOutput<'a> {
    fn from(result: &'a RequestResult) -> Self {
        MonitoringOutput {
            url: &result.url,
            response_code: result.response_code,
            result: if result.is_ok() {
                Verdict::Ok
            } else {
                Verdict::Nok
            },
            response_time_ms: result.response_time_ms,
        }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to encode result as JSON")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write result to standard output")]
    Write(#[from] io::Error),
}

/// Render the result line without the trailing newline.
pub fn render(result: &RequestResult, format: OutputFormat) -> Result<String, ReportError> {
    let output = MonitoringOutput::from(result);
    match format {
        OutputFormat::Text => Ok(text::render_text(&output)),
        OutputFormat::Json => Ok(json::to_json_line(&output)?),
    }
}

pub fn exit_code(result: &RequestResult) -> ExitCode {
    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(CHECK_FAILED_EXIT)
    }
}

/// Write the result line to `writer` and return the process exit code for it.
pub fn write_report<W: Write>(
    writer: &mut W,
    result: &RequestResult,
    format: OutputFormat,
) -> Result<ExitCode, ReportError> {
    let line = render(result, format)?;
    writeln!(writer, "{line}")?;
    writer.flush()?;
    Ok(exit_code(result))
}

/// Print the result line on standard output and return the process exit code for it.
pub fn report(result: &RequestResult, format: OutputFormat) -> Result<ExitCode, ReportError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, result, format)
}
