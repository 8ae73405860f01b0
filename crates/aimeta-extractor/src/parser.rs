//! Parse block text into key/value fields

use aimeta_domain::{FieldMap, Scalar};
use tracing::{debug, trace};

use crate::config::DEFAULT_COMMENT_PREFIX;

/// Parse raw block text into a [`FieldMap`]
///
/// Blank lines, `#` comments, lines without a colon and lines with an empty
/// key or value are skipped. Values are coerced with [`Scalar::coerce`].
/// Repeated keys overwrite earlier ones.
pub fn parse_fields(raw: &str) -> FieldMap {
    parse_fields_with(raw, DEFAULT_COMMENT_PREFIX)
}

pub(crate) fn parse_fields_with(raw: &str, comment_prefix: &str) -> FieldMap {
    let mut fields = FieldMap::new();

    for (idx, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(comment_prefix) {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            debug!(line = idx + 1, "skipping line without a colon");
            continue;
        };

        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            debug!(line = idx + 1, "skipping line with empty key or value");
            continue;
        }

        let scalar = Scalar::coerce(value);
        trace!(key, value = %scalar, "field parsed");
        if fields.insert(key, scalar).is_some() {
            debug!(key, "duplicate key, keeping last value");
        }
    }

    fields
}
