//! Metadata to label projection

use aimeta_domain::{Axis, LabelSchema, Metadata};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::LabelDiff;

/// Agent value that never becomes a label
pub const HUMAN_AGENT: &str = "human";

/// How axis values are rendered as labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// The value alone (`task`)
    #[default]
    Bare,

    /// The value behind its axis prefix (`kind:task`)
    Prefixed,
}

/// Renders metadata as an ordered label list
#[derive(Debug, Clone)]
pub struct LabelProjector {
    style: LabelStyle,
    prefixes: BTreeMap<Axis, String>,
}

impl LabelProjector {
    /// Create a projector using `<axis>:` prefixes
    pub fn new(style: LabelStyle) -> Self {
        let prefixes = Axis::ALL
            .iter()
            .map(|axis| (*axis, axis.default_prefix()))
            .collect();
        Self { style, prefixes }
    }

    /// Create a projector using the schema's prefixes where it declares them
    pub fn from_schema<S: LabelSchema + ?Sized>(schema: &S, style: LabelStyle) -> Self {
        let mut projector = Self::new(style);
        for axis in Axis::ALL {
            if let Some(prefix) = schema.label_prefix(axis) {
                projector.prefixes.insert(axis, prefix.to_string());
            }
        }
        projector
    }

    /// The rendering style
    pub fn style(&self) -> LabelStyle {
        self.style
    }

    /// Render one axis value as a label
    pub fn label(&self, axis: Axis, value: &str) -> String {
        match (self.style, self.prefixes.get(&axis)) {
            (LabelStyle::Prefixed, Some(prefix)) => format!("{}{}", prefix, value),
            _ => value.to_string(),
        }
    }

    /// Labels for a record: kind, phase, status, then agent
    pub fn project(&self, meta: &Metadata) -> Vec<String> {
        Axis::ALL
            .iter()
            .filter_map(|axis| {
                let value = meta.axis_value(*axis)?;
                if *axis == Axis::Agent && value == HUMAN_AGENT {
                    return None;
                }
                Some(self.label(*axis, value))
            })
            .collect()
    }

    /// Changes that bring an issue's current labels in line with a record
    ///
    /// Only labels that render a value of a schema axis are candidates for
    /// removal; anything else on the issue is left alone.
    pub fn reconcile<S: LabelSchema + ?Sized>(
        &self,
        meta: &Metadata,
        current: &[String],
        schema: &S,
    ) -> LabelDiff {
        let desired = self.project(meta);

        let managed: Vec<String> = Axis::ALL
            .iter()
            .filter_map(|axis| Some((*axis, schema.allowed_values(*axis)?)))
            .flat_map(|(axis, values)| {
                values
                    .into_iter()
                    .map(move |v| self.label(axis, &v))
            })
            .collect();

        let remove: Vec<String> = current
            .iter()
            .filter(|label| managed.contains(label) && !desired.contains(label))
            .cloned()
            .collect();

        let add: Vec<String> = desired
            .iter()
            .filter(|label| !current.contains(label))
            .cloned()
            .collect();

        debug!(add = add.len(), remove = remove.len(), "labels reconciled");
        LabelDiff { add, remove }
    }
}

impl Default for LabelProjector {
    fn default() -> Self {
        Self::new(LabelStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aimeta_gatekeeper::SchemaConfig;
    use proptest::prelude::*;

    fn full_record(agent: &str) -> Metadata {
        let mut meta = Metadata::new("task");
        meta.project = Some("web".to_string());
        meta.phase = Some("build".to_string());
        meta.status = Some("todo".to_string());
        meta.agent = Some(agent.to_string());
        meta.effort = Some(5);
        meta
    }

    fn schema() -> SchemaConfig {
        SchemaConfig::default()
            .with_axis(Axis::Kind, ["task", "bug"])
            .with_axis(Axis::Phase, ["plan", "build"])
            .with_axis(Axis::Status, ["todo", "done"])
            .with_axis(Axis::Agent, ["human", "claude"])
    }

    #[test]
    fn test_label_order() {
        let projector = LabelProjector::new(LabelStyle::Bare);
        assert_eq!(
            projector.project(&full_record("claude")),
            vec!["task", "build", "todo", "claude"]
        );
    }

    #[test]
    fn test_prefixed_labels() {
        let projector = LabelProjector::new(LabelStyle::Prefixed);
        assert_eq!(
            projector.project(&full_record("claude")),
            vec!["kind:task", "phase:build", "status:todo", "agent:claude"]
        );
    }

    #[test]
    fn test_human_agent_excluded() {
        let projector = LabelProjector::new(LabelStyle::Prefixed);
        let labels = projector.project(&full_record("human"));
        assert_eq!(labels, vec!["kind:task", "phase:build", "status:todo"]);
    }

    #[test]
    fn test_absent_fields_skipped() {
        let projector = LabelProjector::default();
        let mut meta = Metadata::new("bug");
        meta.status = Some("done".to_string());
        assert_eq!(projector.project(&meta), vec!["bug", "done"]);
    }

    #[test]
    fn test_schema_prefix_override() {
        let schema = schema().with_prefix(Axis::Kind, "type/");
        let projector = LabelProjector::from_schema(&schema, LabelStyle::Prefixed);
        assert_eq!(projector.label(Axis::Kind, "task"), "type/task");
        assert_eq!(projector.label(Axis::Phase, "plan"), "phase:plan");

        let bare = LabelProjector::from_schema(&schema, LabelStyle::Bare);
        assert_eq!(bare.label(Axis::Kind, "task"), "task");
    }

    #[test]
    fn test_reconcile() {
        let projector = LabelProjector::new(LabelStyle::Prefixed);
        let current = vec![
            "kind:bug".to_string(),
            "phase:build".to_string(),
            "agent:human".to_string(),
            "good first issue".to_string(),
            "status:unknown".to_string(),
        ];

        let diff = projector.reconcile(&full_record("claude"), &current, &schema());
        assert_eq!(diff.add, vec!["kind:task", "status:todo", "agent:claude"]);
        assert_eq!(diff.remove, vec!["kind:bug", "agent:human"]);
    }

    #[test]
    fn test_reconcile_in_sync() {
        let projector = LabelProjector::new(LabelStyle::Bare);
        let meta = full_record("human");
        let current = projector.project(&meta);

        let diff = projector.reconcile(&meta, &current, &schema());
        assert!(diff.is_empty());
    }

    proptest! {
        #[test]
        fn prop_projection_is_deterministic(
            kind in "[a-z]{1,8}",
            phase in proptest::option::of("[a-z]{1,8}"),
            agent in proptest::option::of("(human|claude|codex)"),
        ) {
            let mut meta = Metadata::new(kind);
            meta.phase = phase;
            meta.agent = agent.clone();

            let projector = LabelProjector::new(LabelStyle::Prefixed);
            let labels = projector.project(&meta);
            prop_assert_eq!(&labels, &projector.project(&meta));
            prop_assert!(!labels.iter().any(|l| l == "agent:human"));
            prop_assert_eq!(
                labels.iter().any(|l| l.starts_with("agent:")),
                agent.is_some_and(|a| a != HUMAN_AGENT)
            );
        }
    }
}
