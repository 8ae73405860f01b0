//! Parse command implementation.

use crate::error::Result;
use crate::output::Formatter;
use crate::pipeline::Pipeline;

/// Execute the parse command.
///
/// Returns the rendered record; an invalid body is returned as the error.
pub fn execute_parse(body: &str, pipeline: &Pipeline, formatter: &Formatter) -> Result<String> {
    let meta = pipeline.extractor.parse(Some(body))?;
    formatter.format_metadata(&meta, pipeline.field_names())
}
