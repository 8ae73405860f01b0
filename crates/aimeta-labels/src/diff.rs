//! Label changes for an issue

/// Labels to add to and remove from an issue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelDiff {
    /// Labels the issue is missing, in projection order
    pub add: Vec<String>,

    /// Stale schema labels, in the order the issue lists them
    pub remove: Vec<String>,
}

impl LabelDiff {
    /// Whether the issue already carries exactly the right labels
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}
