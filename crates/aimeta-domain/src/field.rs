//! Field module - record fields and the input keys that carry them

use crate::Axis;
use std::fmt;

/// A field of the validated [`Metadata`](crate::Metadata) record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Assigned agent (closed set)
    Agent,

    /// Effort estimate (positive integer)
    Effort,

    /// Issue discriminator (closed set, required)
    Kind,

    /// Delivery phase (closed set)
    Phase,

    /// Owning project (free-form)
    Project,

    /// Tracker status (closed set)
    Status,
}

impl Field {
    /// The axis whose vocabulary constrains this field, if any
    pub fn axis(&self) -> Option<Axis> {
        match self {
            Field::Kind => Some(Axis::Kind),
            Field::Phase => Some(Axis::Phase),
            Field::Status => Some(Axis::Status),
            Field::Agent => Some(Axis::Agent),
            Field::Effort | Field::Project => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Agent => "agent",
            Field::Effort => "effort",
            Field::Kind => "kind",
            Field::Phase => "phase",
            Field::Project => "project",
            Field::Status => "status",
        };
        f.write_str(name)
    }
}

/// Input key used for each [`Field`] inside a block
///
/// Two naming conventions exist for the same record: the canonical one
/// (`kind`, `status`, `project`) and the legacy one (`type`, `state`,
/// `project_id`). Keys are also what error messages name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    /// Key for [`Field::Kind`]
    pub kind: String,
    /// Key for [`Field::Phase`]
    pub phase: String,
    /// Key for [`Field::Status`]
    pub status: String,
    /// Key for [`Field::Agent`]
    pub agent: String,
    /// Key for [`Field::Effort`]
    pub effort: String,
    /// Key for [`Field::Project`]
    pub project: String,
}

impl FieldNames {
    /// `kind`, `phase`, `status`, `agent`, `effort`, `project`
    pub fn canonical() -> Self {
        Self {
            kind: "kind".to_string(),
            phase: "phase".to_string(),
            status: "status".to_string(),
            agent: "agent".to_string(),
            effort: "effort".to_string(),
            project: "project".to_string(),
        }
    }

    /// `type`, `phase`, `state`, `agent`, `effort`, `project_id`
    pub fn legacy() -> Self {
        Self {
            kind: "type".to_string(),
            phase: "phase".to_string(),
            status: "state".to_string(),
            agent: "agent".to_string(),
            effort: "effort".to_string(),
            project: "project_id".to_string(),
        }
    }

    /// Input key for a field
    pub fn key(&self, field: Field) -> &str {
        match field {
            Field::Kind => &self.kind,
            Field::Phase => &self.phase,
            Field::Status => &self.status,
            Field::Agent => &self.agent,
            Field::Effort => &self.effort,
            Field::Project => &self.project,
        }
    }
}

impl Default for FieldNames {
    fn default() -> Self {
        Self::canonical()
    }
}
