//! Error types for the Extractor

use aimeta_gatekeeper::ValidationError;
use thiserror::Error;

/// Reasons a body yields no metadata
///
/// Exactly one is reported per body. The `Display` output is the message
/// shown to users.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No body at all
    #[error("empty body")]
    EmptyBody,

    /// Body exceeds the configured maximum length
    #[error("body too long: {0} bytes (max: {1})")]
    BodyTooLong(usize, usize),

    /// Body has no ai-meta block
    #[error("no metadata block found")]
    NoMetadataBlock,

    /// Block found but its fields are invalid
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur while building an Extractor
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Block pattern could not be compiled
    #[error("Invalid block pattern: {0}")]
    Pattern(#[from] regex::Error),
}
