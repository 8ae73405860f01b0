//! Labels command implementation.

use crate::cli::LabelsArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::pipeline::Pipeline;

/// Execute the labels command.
///
/// Prints the projected labels, or the add/remove diff against `--current`.
pub fn execute_labels(
    body: &str,
    args: &LabelsArgs,
    pipeline: &Pipeline,
    formatter: &Formatter,
) -> Result<String> {
    let meta = pipeline.extractor.parse(Some(body))?;

    let projector = match args.style {
        Some(style) => pipeline.projector_with_style(style.into()),
        None => pipeline.projector.clone(),
    };

    if args.current.is_empty() {
        formatter.format_labels(&projector.project(&meta))
    } else {
        let diff = projector.reconcile(&meta, &args.current, pipeline.schema());
        formatter.format_diff(&diff)
    }
}
