//! Trait definitions for external interactions
//!
//! These traits define the boundary between the pipeline and wherever the
//! label vocabulary comes from. Implementations live in other crates.

use crate::Axis;

/// Source of the closed vocabulary for each axis
///
/// Implemented by the configuration layer (aimeta-gatekeeper's `SchemaConfig`).
/// Implementations are read-only after loading, so shared references may be
/// used from any number of threads.
pub trait LabelSchema {
    /// Declared values for an axis, in declared order
    ///
    /// Returns `None` when the schema does not declare the axis at all.
    /// Values may carry the axis label prefix (`kind:task`).
    fn values(&self, axis: Axis) -> Option<&[String]>;

    /// Label prefix used for this axis, if the schema names one
    fn label_prefix(&self, axis: Axis) -> Option<&str> {
        let _ = axis;
        None
    }

    /// Maximum number of labels an issue may carry on this axis
    ///
    /// Declared for consumers that apply labels; not enforced by the pipeline.
    fn max_labels(&self, axis: Axis) -> Option<usize> {
        let _ = axis;
        None
    }

    /// Permitted bare values for an axis, prefix stripped, in declared order
    fn allowed_values(&self, axis: Axis) -> Option<Vec<String>> {
        let values = self.values(axis)?;
        let prefix = self.label_prefix(axis);

        Some(
            values
                .iter()
                .map(|v| match prefix {
                    Some(p) => v.strip_prefix(p).unwrap_or(v).to_string(),
                    None => v.clone(),
                })
                .collect(),
        )
    }
}

impl<T: LabelSchema + ?Sized> LabelSchema for &T {
    fn values(&self, axis: Axis) -> Option<&[String]> {
        (**self).values(axis)
    }

    fn label_prefix(&self, axis: Axis) -> Option<&str> {
        (**self).label_prefix(axis)
    }

    fn max_labels(&self, axis: Axis) -> Option<usize> {
        (**self).max_labels(axis)
    }
}

impl<T: LabelSchema + ?Sized> LabelSchema for std::sync::Arc<T> {
    fn values(&self, axis: Axis) -> Option<&[String]> {
        (**self).values(axis)
    }

    fn label_prefix(&self, axis: Axis) -> Option<&str> {
        (**self).label_prefix(axis)
    }

    fn max_labels(&self, axis: Axis) -> Option<usize> {
        (**self).max_labels(axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PrefixedSchema {
        kinds: Vec<String>,
    }

    impl LabelSchema for PrefixedSchema {
        fn values(&self, axis: Axis) -> Option<&[String]> {
            match axis {
                Axis::Kind => Some(&self.kinds),
                _ => None,
            }
        }

        fn label_prefix(&self, axis: Axis) -> Option<&str> {
            match axis {
                Axis::Kind => Some("kind:"),
                _ => None,
            }
        }
    }

    #[test]
    fn test_allowed_values_strip_prefix() {
        let schema = PrefixedSchema {
            kinds: vec!["kind:task".to_string(), "kind:bug".to_string(), "epic".to_string()],
        };

        assert_eq!(
            schema.allowed_values(Axis::Kind),
            Some(vec!["task".to_string(), "bug".to_string(), "epic".to_string()])
        );
        assert_eq!(schema.allowed_values(Axis::Phase), None);
        assert_eq!(schema.max_labels(Axis::Kind), None);
    }

    #[test]
    fn test_reference_forwards() {
        let schema = PrefixedSchema {
            kinds: vec!["kind:task".to_string()],
        };
        let by_ref: &dyn LabelSchema = &schema;
        assert_eq!(by_ref.label_prefix(Axis::Kind), Some("kind:"));
        assert_eq!(by_ref.allowed_values(Axis::Kind), Some(vec!["task".to_string()]));
    }
}
