//! Gatekeeper error types

use thiserror::Error;

/// Reasons a block fails validation
///
/// The `Display` output of each variant is the message reported to users.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field absent from the block
    #[error("Missing required field: {field}")]
    MissingField {
        /// Input key of the field
        field: String,
    },

    /// Closed-set field holding a value outside its vocabulary
    #[error("Invalid {field}: {value}. Must be one of: {}", .allowed.join(", "))]
    InvalidValue {
        /// Input key of the field
        field: String,
        /// Offending value as written
        value: String,
        /// Permitted values in schema order
        allowed: Vec<String>,
    },

    /// Discriminator that is not text, with no vocabulary to list
    #[error("Invalid {field}: {value}. Must be text")]
    NotText {
        /// Input key of the field
        field: String,
        /// Offending value as written
        value: String,
    },

    /// Effort that is not a positive integer
    #[error("Invalid {field}: {value}. Must be a positive number")]
    InvalidEffort {
        /// Input key of the field
        field: String,
        /// Offending value as written
        value: String,
    },
}

impl ValidationError {
    /// Whether this is a missing-required-field failure
    pub fn is_missing_field(&self) -> bool {
        matches!(self, ValidationError::MissingField { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let missing = ValidationError::MissingField {
            field: "kind".to_string(),
        };
        assert_eq!(missing.to_string(), "Missing required field: kind");

        let invalid = ValidationError::InvalidValue {
            field: "type".to_string(),
            value: "epic".to_string(),
            allowed: vec!["task".to_string(), "project".to_string()],
        };
        assert_eq!(
            invalid.to_string(),
            "Invalid type: epic. Must be one of: task, project"
        );

        let effort = ValidationError::InvalidEffort {
            field: "effort".to_string(),
            value: "0".to_string(),
        };
        assert_eq!(effort.to_string(), "Invalid effort: 0. Must be a positive number");
    }
}
