//! Locate the ai-meta block inside an issue body

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::config::DEFAULT_MARKER;

static DEFAULT_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&block_pattern(DEFAULT_MARKER)).expect("invalid regex"));

/// Pattern matching `<!-- <marker>` + newline, the block interior, and `-->`
pub(crate) fn block_pattern(marker: &str) -> String {
    format!(
        r"<!--[ \t]*{}[ \t]*\r?\n([\s\S]*?)-->",
        regex::escape(marker)
    )
}

/// Extract the trimmed interior of the first `<!-- ai-meta` block
///
/// Returns `None` when the body is absent or holds no block. Later blocks
/// are ignored.
///
/// # Examples
///
/// ```
/// use aimeta_extractor::extract_block;
///
/// let body = "Intro\n<!-- ai-meta\nkind: task\n-->\nOutro";
/// assert_eq!(extract_block(Some(body)).as_deref(), Some("kind: task"));
/// assert_eq!(extract_block(Some("no block here")), None);
/// assert_eq!(extract_block(None), None);
/// ```
pub fn extract_block(body: Option<&str>) -> Option<String> {
    extract_with(&DEFAULT_BLOCK_REGEX, body?)
}

pub(crate) fn extract_with(pattern: &Regex, body: &str) -> Option<String> {
    let inner = pattern.captures(body)?.get(1)?;
    debug!(start = inner.start(), len = inner.len(), "metadata block found");
    Some(inner.as_str().trim().to_string())
}
