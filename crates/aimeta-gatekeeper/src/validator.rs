//! Field validation and record assembly

use aimeta_domain::{Field, FieldMap, LabelSchema, Metadata, Scalar};
use tracing::{debug, warn};

use crate::rules::RULES;
use crate::{ValidationConfig, ValidationError};

/// The Gatekeeper validates parsed fields and builds the metadata record
#[derive(Debug, Clone)]
pub struct Gatekeeper<S> {
    schema: S,
    config: ValidationConfig,
}

impl<S: LabelSchema> Gatekeeper<S> {
    /// Create a new Gatekeeper over a schema
    pub fn new(schema: S, config: ValidationConfig) -> Self {
        Self { schema, config }
    }

    /// Create a Gatekeeper with canonical field names
    pub fn default_config(schema: S) -> Self {
        Self::new(schema, ValidationConfig::default())
    }

    /// The schema this gatekeeper validates against
    pub fn schema(&self) -> &S {
        &self.schema
    }

    /// The active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Collect every failure, in reporting order
    ///
    /// A missing required field is reported ahead of everything else; the
    /// remaining failures follow the rule table order.
    pub fn review(&self, fields: &FieldMap) -> Vec<ValidationError> {
        let names = &self.config.field_names;

        let mut reasons: Vec<ValidationError> = RULES
            .iter()
            .filter_map(|(field, rule)| {
                let key = names.key(*field);
                rule.check(key, fields.get(key), &self.schema)
            })
            .collect();

        // Stable: rule order is kept within each group
        reasons.sort_by_key(|r| !r.is_missing_field());
        reasons
    }

    /// Validate fields and build the record
    ///
    /// # Returns
    ///
    /// The complete record, or the first failure in reporting order
    pub fn validate(&self, fields: &FieldMap) -> Result<Metadata, ValidationError> {
        if let Some(first) = self.review(fields).into_iter().next() {
            warn!(error = %first, "metadata rejected");
            return Err(first);
        }

        let meta = self.assemble(fields)?;
        debug!(kind = %meta.kind, "metadata accepted");
        Ok(meta)
    }

    /// Build the record from fields that already passed every rule
    ///
    /// Optional fields whose axis the schema does not declare are left out.
    fn assemble(&self, fields: &FieldMap) -> Result<Metadata, ValidationError> {
        let names = &self.config.field_names;
        let kind_key = names.key(Field::Kind);

        let kind = fields
            .get(kind_key)
            .and_then(Scalar::as_str)
            .ok_or_else(|| ValidationError::MissingField {
                field: kind_key.to_string(),
            })?;

        let mut meta = Metadata::new(kind);
        meta.phase = self.closed_value(fields, Field::Phase);
        meta.status = self.closed_value(fields, Field::Status);
        meta.agent = self.closed_value(fields, Field::Agent);
        meta.effort = fields.get(names.key(Field::Effort)).and_then(Scalar::as_int);
        meta.project = fields.get(names.key(Field::Project)).map(|v| v.to_string());

        Ok(meta)
    }

    fn closed_value(&self, fields: &FieldMap, field: Field) -> Option<String> {
        let axis = field.axis()?;
        self.schema.values(axis)?;
        fields
            .get(self.config.field_names.key(field))
            .and_then(Scalar::as_str)
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchemaConfig;
    use aimeta_domain::Axis;

    fn create_test_schema() -> SchemaConfig {
        SchemaConfig::default()
            .with_axis(Axis::Kind, ["task", "project"])
            .with_axis(Axis::Phase, ["plan", "build", "review"])
            .with_axis(Axis::Status, ["todo", "in-progress", "done"])
            .with_axis(Axis::Agent, ["human", "claude"])
    }

    fn fields(pairs: &[(&str, Scalar)]) -> FieldMap {
        pairs.iter().map(|(k, v)| (*k, v.clone())).collect()
    }

    fn s(v: &str) -> Scalar {
        Scalar::Str(v.to_string())
    }

    #[test]
    fn test_valid_record() {
        let gatekeeper = Gatekeeper::default_config(create_test_schema());
        let input = fields(&[
            ("kind", s("task")),
            ("project", s("website")),
            ("phase", s("build")),
            ("status", s("todo")),
            ("agent", s("claude")),
            ("effort", Scalar::Int(3)),
        ]);

        let meta = gatekeeper.validate(&input).unwrap();
        assert_eq!(meta.kind, "task");
        assert_eq!(meta.project.as_deref(), Some("website"));
        assert_eq!(meta.phase.as_deref(), Some("build"));
        assert_eq!(meta.status.as_deref(), Some("todo"));
        assert_eq!(meta.agent.as_deref(), Some("claude"));
        assert_eq!(meta.effort, Some(3));
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let gatekeeper = Gatekeeper::default_config(create_test_schema());
        let meta = gatekeeper.validate(&fields(&[("kind", s("project"))])).unwrap();
        assert_eq!(meta, Metadata::new("project"));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let gatekeeper = Gatekeeper::default_config(create_test_schema());
        let input = fields(&[("kind", s("task")), ("priority", s("p0"))]);
        assert!(gatekeeper.validate(&input).is_ok());
    }

    #[test]
    fn test_missing_kind_wins_over_other_failures() {
        let gatekeeper = Gatekeeper::default_config(create_test_schema());
        let input = fields(&[
            ("agent", s("robot")),
            ("effort", Scalar::Int(0)),
            ("phase", s("ship")),
        ]);

        let err = gatekeeper.validate(&input).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: kind");
    }

    #[test]
    fn test_first_failure_in_rule_order() {
        let gatekeeper = Gatekeeper::default_config(create_test_schema());
        let input = fields(&[
            ("status", s("blocked")),
            ("phase", s("ship")),
            ("kind", s("epic")),
            ("effort", s("big")),
            ("agent", s("robot")),
        ]);

        let reasons = gatekeeper.review(&input);
        assert_eq!(reasons.len(), 5);
        assert_eq!(
            reasons[0].to_string(),
            "Invalid agent: robot. Must be one of: human, claude"
        );
        assert_eq!(
            reasons[1].to_string(),
            "Invalid effort: big. Must be a positive number"
        );
        assert!(reasons[2].to_string().starts_with("Invalid kind: epic"));
        assert!(reasons[3].to_string().starts_with("Invalid phase: ship"));
        assert!(reasons[4].to_string().starts_with("Invalid status: blocked"));

        let err = gatekeeper.validate(&input).unwrap_err();
        assert_eq!(err, reasons[0]);
    }

    #[test]
    fn test_legacy_field_names() {
        let schema = SchemaConfig::default()
            .with_axis(Axis::Kind, ["task", "project"])
            .with_axis(Axis::Status, ["open", "closed"]);
        let gatekeeper = Gatekeeper::new(schema, ValidationConfig::legacy());

        let input = fields(&[
            ("type", s("task")),
            ("state", s("open")),
            ("project_id", Scalar::Int(42)),
        ]);
        let meta = gatekeeper.validate(&input).unwrap();
        assert_eq!(meta.kind, "task");
        assert_eq!(meta.status.as_deref(), Some("open"));
        assert_eq!(meta.project.as_deref(), Some("42"));

        let err = gatekeeper
            .validate(&fields(&[("type", s("epic"))]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid type: epic. Must be one of: task, project");

        // Canonical keys mean nothing under legacy naming
        let err = gatekeeper
            .validate(&fields(&[("kind", s("task"))]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: type");
    }

    #[test]
    fn test_undeclared_axis_is_not_part_of_record() {
        let schema = SchemaConfig::default().with_axis(Axis::Kind, ["task"]);
        let gatekeeper = Gatekeeper::default_config(schema);

        let meta = gatekeeper
            .validate(&fields(&[("kind", s("task")), ("phase", s("anything"))]))
            .unwrap();
        assert_eq!(meta.phase, None);
    }

    #[test]
    fn test_allowed_values_in_declared_order() {
        let schema = SchemaConfig::default().with_axis(Axis::Kind, ["zeta", "alpha", "mid"]);
        let gatekeeper = Gatekeeper::default_config(schema);

        let err = gatekeeper.validate(&fields(&[("kind", s("x"))])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid kind: x. Must be one of: zeta, alpha, mid");
    }

    #[test]
    fn test_shared_schema_reference() {
        let schema = create_test_schema();
        let first = Gatekeeper::default_config(&schema);
        let second = Gatekeeper::new(&schema, ValidationConfig::legacy());

        assert!(first.validate(&fields(&[("kind", s("task"))])).is_ok());
        assert!(second.validate(&fields(&[("type", s("task"))])).is_ok());
    }
}
