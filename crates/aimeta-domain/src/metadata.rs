//! Metadata module - the validated record

use crate::Axis;

/// Validated issue metadata
///
/// Only the gatekeeper builds these, and only when every rule passed.
/// Optional fields absent from the block stay `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Issue discriminator (member of the kind axis)
    pub kind: String,

    /// Owning project, passed through unvalidated
    pub project: Option<String>,

    /// Delivery phase (member of the phase axis)
    pub phase: Option<String>,

    /// Tracker status (member of the status axis)
    pub status: Option<String>,

    /// Assigned agent (member of the agent axis)
    pub agent: Option<String>,

    /// Effort estimate, always > 0
    pub effort: Option<u64>,
}

impl Metadata {
    /// Create a record with only the discriminator set
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            project: None,
            phase: None,
            status: None,
            agent: None,
            effort: None,
        }
    }

    /// Value held for an axis
    pub fn axis_value(&self, axis: Axis) -> Option<&str> {
        match axis {
            Axis::Kind => Some(&self.kind),
            Axis::Phase => self.phase.as_deref(),
            Axis::Status => self.status.as_deref(),
            Axis::Agent => self.agent.as_deref(),
        }
    }
}
