//! Axis module - label dimensions with closed vocabularies

use std::fmt;

/// A label axis
///
/// Each axis has a closed set of permitted values supplied by the schema:
/// - Kind: what the issue is (the required discriminator)
/// - Phase: where the work stands in the delivery cycle
/// - Status: the tracker state
/// - Agent: who is expected to pick the work up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Issue discriminator
    Kind,

    /// Delivery phase
    Phase,

    /// Tracker status
    Status,

    /// Assigned agent
    Agent,
}

impl Axis {
    /// All axes in label order
    pub const ALL: [Axis; 4] = [Axis::Kind, Axis::Phase, Axis::Status, Axis::Agent];

    /// Get the axis name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Kind => "kind",
            Axis::Phase => "phase",
            Axis::Status => "status",
            Axis::Agent => "agent",
        }
    }

    /// Parse an axis from its name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "kind" => Some(Axis::Kind),
            "phase" => Some(Axis::Phase),
            "status" => Some(Axis::Status),
            "agent" => Some(Axis::Agent),
            _ => None,
        }
    }

    /// Default label prefix for this axis (`kind:`, `phase:` ...)
    pub fn default_prefix(&self) -> String {
        format!("{}:", self.as_str())
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid axis: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_names_round_trip() {
        for axis in Axis::ALL {
            assert_eq!(Axis::parse(axis.as_str()), Some(axis));
        }
        assert_eq!("Status".parse::<Axis>(), Ok(Axis::Status));
        assert!("type".parse::<Axis>().is_err());
    }

    #[test]
    fn test_default_prefix() {
        assert_eq!(Axis::Kind.default_prefix(), "kind:");
        assert_eq!(Axis::Agent.default_prefix(), "agent:");
    }
}
