//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Block name used when none is configured
pub const DEFAULT_MARKER: &str = "ai-meta";

/// Line prefix marking a comment inside a block
pub const DEFAULT_COMMENT_PREFIX: &str = "#";

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Block name following `<!--` (case-sensitive)
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Lines starting with this prefix are skipped
    #[serde(default = "default_comment_prefix")]
    pub comment_prefix: String,

    /// Maximum body length accepted (bytes)
    #[serde(default = "default_max_body_length")]
    pub max_body_length: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.marker.trim().is_empty() {
            return Err("marker must not be empty".to_string());
        }
        if self.marker.chars().any(char::is_whitespace) {
            return Err("marker must not contain whitespace".to_string());
        }
        if self.comment_prefix.is_empty() {
            return Err("comment_prefix must not be empty".to_string());
        }
        if self.max_body_length == 0 {
            return Err("max_body_length must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            comment_prefix: default_comment_prefix(),
            max_body_length: default_max_body_length(),
        }
    }
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_comment_prefix() -> String {
    DEFAULT_COMMENT_PREFIX.to_string()
}

// GitHub's issue body cap: 65536 characters of up to four bytes each
fn default_max_body_length() -> usize {
    262_144
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.marker, "ai-meta");
        assert_eq!(config.comment_prefix, "#");
    }

    #[test]
    fn test_invalid_marker() {
        let mut config = ExtractorConfig::default();
        config.marker = "ai meta".to_string();
        assert!(config.validate().is_err());

        config.marker = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_max_body_length() {
        let mut config = ExtractorConfig::default();
        config.max_body_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ExtractorConfig::from_toml("marker = \"task-meta\"").unwrap();
        assert_eq!(config.marker, "task-meta");
        assert_eq!(config.comment_prefix, "#");
        assert_eq!(config.max_body_length, 262_144);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig {
            marker: "meta".to_string(),
            comment_prefix: "//".to_string(),
            max_body_length: 1024,
        };
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}
