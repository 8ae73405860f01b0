//! Gatekeeper configuration

use aimeta_domain::FieldNames;

/// Configuration for validation
#[derive(Debug, Clone, Default)]
pub struct ValidationConfig {
    /// Input keys for each record field
    pub field_names: FieldNames,
}

impl ValidationConfig {
    /// Canonical keys: `kind`, `status`, `project`
    pub fn canonical() -> Self {
        Self {
            field_names: FieldNames::canonical(),
        }
    }

    /// Legacy keys: `type`, `state`, `project_id`
    pub fn legacy() -> Self {
        Self {
            field_names: FieldNames::legacy(),
        }
    }
}
