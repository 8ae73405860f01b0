//! Per-field validation rules
//!
//! Validation is a fixed table of `(Field, Rule)` pairs. The table order is
//! the order in which failures are reported, so the same malformed block
//! always yields the same message.

use aimeta_domain::{Axis, Field, LabelSchema, Scalar};
use tracing::trace;

use crate::ValidationError;

/// A check applied to one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Must be present and a member of the axis vocabulary
    Required(Axis),

    /// If present, must be a member of the axis vocabulary
    OneOf(Axis),

    /// If present, must be an integer greater than zero
    PositiveInteger,

    /// Never checked
    FreeForm,
}

/// Rule table in reporting order
pub const RULES: [(Field, Rule); 6] = [
    (Field::Agent, Rule::OneOf(Axis::Agent)),
    (Field::Effort, Rule::PositiveInteger),
    (Field::Kind, Rule::Required(Axis::Kind)),
    (Field::Phase, Rule::OneOf(Axis::Phase)),
    (Field::Project, Rule::FreeForm),
    (Field::Status, Rule::OneOf(Axis::Status)),
];

impl Rule {
    /// Check one field value
    ///
    /// # Arguments
    ///
    /// * `key` - Input key of the field, used in the error message
    /// * `value` - The value read from the block, if any
    /// * `schema` - Vocabulary source for closed-set rules
    ///
    /// # Returns
    ///
    /// `None` when the value passes, otherwise the failure
    pub fn check<S: LabelSchema + ?Sized>(
        &self,
        key: &str,
        value: Option<&Scalar>,
        schema: &S,
    ) -> Option<ValidationError> {
        let outcome = match (self, value) {
            (Rule::Required(_), None) => Some(ValidationError::MissingField {
                field: key.to_string(),
            }),
            (Rule::Required(axis), Some(value)) => match schema.allowed_values(*axis) {
                Some(allowed) => check_member(key, value, allowed),
                // No vocabulary declared: any string is accepted
                None if value.as_str().is_some() => None,
                None => Some(ValidationError::NotText {
                    field: key.to_string(),
                    value: value.to_string(),
                }),
            },
            (Rule::OneOf(axis), Some(value)) => schema
                .allowed_values(*axis)
                .and_then(|allowed| check_member(key, value, allowed)),
            (Rule::PositiveInteger, Some(value)) => match value.as_int() {
                Some(n) if n > 0 => None,
                _ => Some(ValidationError::InvalidEffort {
                    field: key.to_string(),
                    value: value.to_string(),
                }),
            },
            (Rule::OneOf(_), None) | (Rule::PositiveInteger, None) | (Rule::FreeForm, _) => None,
        };

        trace!(key, rule = ?self, passed = outcome.is_none(), "rule evaluated");
        outcome
    }
}

fn check_member(key: &str, value: &Scalar, allowed: Vec<String>) -> Option<ValidationError> {
    match value.as_str() {
        Some(s) if allowed.iter().any(|a| a == s) => None,
        _ => Some(ValidationError::InvalidValue {
            field: key.to_string(),
            value: value.to_string(),
            allowed,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct KindsOnly(Vec<String>);

    impl LabelSchema for KindsOnly {
        fn values(&self, axis: Axis) -> Option<&[String]> {
            match axis {
                Axis::Kind => Some(&self.0),
                _ => None,
            }
        }
    }

    struct NoAxes;

    impl LabelSchema for NoAxes {
        fn values(&self, _axis: Axis) -> Option<&[String]> {
            None
        }
    }

    fn schema() -> KindsOnly {
        KindsOnly(vec!["task".to_string(), "project".to_string()])
    }

    fn s(v: &str) -> Scalar {
        Scalar::Str(v.to_string())
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let order: Vec<Field> = RULES.iter().map(|(f, _)| *f).collect();
        assert_eq!(
            order,
            vec![
                Field::Agent,
                Field::Effort,
                Field::Kind,
                Field::Phase,
                Field::Project,
                Field::Status
            ]
        );
    }

    #[test]
    fn test_required_missing() {
        let result = Rule::Required(Axis::Kind).check("kind", None, &schema());
        assert_eq!(
            result,
            Some(ValidationError::MissingField {
                field: "kind".to_string()
            })
        );
    }

    #[test]
    fn test_required_member_and_non_member() {
        let rule = Rule::Required(Axis::Kind);
        assert!(rule.check("kind", Some(&s("task")), &schema()).is_none());

        let err = rule.check("type", Some(&s("epic")), &schema()).unwrap();
        assert_eq!(err.to_string(), "Invalid type: epic. Must be one of: task, project");
    }

    #[test]
    fn test_non_string_is_never_a_member() {
        let schema = KindsOnly(vec!["1".to_string()]);
        let err = Rule::Required(Axis::Kind)
            .check("kind", Some(&Scalar::Int(1)), &schema)
            .unwrap();
        assert!(matches!(err, ValidationError::InvalidValue { .. }));
    }

    #[test]
    fn test_undeclared_kind_accepts_only_text() {
        let rule = Rule::Required(Axis::Kind);
        let undeclared = NoAxes;
        assert!(rule.check("kind", Some(&s("anything")), &undeclared).is_none());

        let err = rule.check("kind", Some(&Scalar::Int(7)), &undeclared).unwrap();
        assert_eq!(
            err,
            ValidationError::NotText {
                field: "kind".to_string(),
                value: "7".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Invalid kind: 7. Must be text");
    }

    #[test]
    fn test_one_of_absent_or_undeclared_passes() {
        let rule = Rule::OneOf(Axis::Phase);
        assert!(rule.check("phase", None, &schema()).is_none());
        // Phase axis is not declared, so there is nothing to check against
        assert!(rule.check("phase", Some(&s("anything")), &schema()).is_none());
    }

    #[test]
    fn test_positive_integer() {
        let rule = Rule::PositiveInteger;
        assert!(rule.check("effort", Some(&Scalar::Int(3)), &schema()).is_none());
        assert!(rule.check("effort", None, &schema()).is_none());

        let zero = rule.check("effort", Some(&Scalar::Int(0)), &schema()).unwrap();
        assert_eq!(zero.to_string(), "Invalid effort: 0. Must be a positive number");

        let text = rule.check("effort", Some(&s("lots")), &schema()).unwrap();
        assert_eq!(text.to_string(), "Invalid effort: lots. Must be a positive number");

        assert!(rule.check("effort", Some(&Scalar::Bool(true)), &schema()).is_some());
    }

    #[test]
    fn test_free_form_never_fails() {
        let rule = Rule::FreeForm;
        assert!(rule.check("project", Some(&Scalar::Bool(false)), &schema()).is_none());
        assert!(rule.check("project", None, &schema()).is_none());
    }
}
