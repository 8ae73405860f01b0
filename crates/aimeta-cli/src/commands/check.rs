//! Check command implementation.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::pipeline::Pipeline;

/// Execute the check command.
///
/// Unlike `parse`, every failure is listed. Any failure makes the command
/// fail with the rendered report.
pub fn execute_check(body: &str, pipeline: &Pipeline, formatter: &Formatter) -> Result<String> {
    let failures = match pipeline.extractor.review(Some(body)) {
        Ok(failures) => failures,
        Err(structural) => vec![structural],
    };

    let report = formatter.format_failures(&failures)?;
    if failures.is_empty() {
        Ok(report)
    } else {
        Err(CliError::Rejected(report))
    }
}
