use super::MonitoringOutput;

/// Marker printed in place of a missing status code.
pub const NULL_MARKER: &str = "None";

/// `"<response_code> <result> <response_time_ms>"`.
///
/// The latency is rounded to whole milliseconds with round-half-to-even, so `2.5` prints as `2`
/// and `3.5` as `4`.
pub fn render_text(output: &MonitoringOutput<'_>) -> String {
    let code = output
        .response_code
        .map(|code| code.to_string())
        .unwrap_or_else(|| NULL_MARKER.to_string());

    format!(
        "{} {} {:.0}",
        code,
        output.result,
        output.response_time_ms.round_ties_even()
    )
}
