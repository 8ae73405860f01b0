//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Schema could not be loaded
    #[error("Schema error: {0}")]
    Schema(#[from] aimeta_gatekeeper::ConfigError),

    /// Extractor could not be built
    #[error("Extractor error: {0}")]
    Extractor(#[from] aimeta_extractor::ExtractorError),

    /// The body holds no valid metadata
    #[error(transparent)]
    Parse(#[from] aimeta_extractor::ParseError),

    /// Validation failed; carries the rendered failure report
    #[error("{0}")]
    Rejected(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
