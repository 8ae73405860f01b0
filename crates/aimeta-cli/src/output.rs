//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use aimeta_domain::{Field, FieldNames, Metadata};
use aimeta_extractor::ParseError;
use aimeta_labels::LabelDiff;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a validated record, keyed by the block's field names.
    pub fn format_metadata(&self, meta: &Metadata, names: &FieldNames) -> Result<String> {
        let rows = metadata_rows(meta, names);

        match self.format {
            OutputFormat::Json => {
                let object: serde_json::Map<String, serde_json::Value> =
                    rows.into_iter().collect();
                Ok(serde_json::to_string_pretty(&object)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                for (key, value) in &rows {
                    let text = match value {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    builder.push_record([key.as_str(), text.as_str()]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Quiet => Ok(meta.kind.clone()),
        }
    }

    /// Format a label list.
    pub fn format_labels(&self, labels: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(labels)?),
            OutputFormat::Table => {
                if labels.is_empty() {
                    return Ok(self.colorize("No labels.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["Label"]);
                for label in labels {
                    builder.push_record([label.as_str()]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Quiet => Ok(labels.join("\n")),
        }
    }

    /// Format label changes for an issue.
    pub fn format_diff(&self, diff: &LabelDiff) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "add": diff.add,
                "remove": diff.remove,
            }))?),
            OutputFormat::Table => {
                if diff.is_empty() {
                    return Ok(self.success("Labels are up to date"));
                }
                let mut builder = Builder::default();
                builder.push_record(["Change", "Label"]);
                for label in &diff.add {
                    builder.push_record(["add", label.as_str()]);
                }
                for label in &diff.remove {
                    builder.push_record(["remove", label.as_str()]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Quiet => {
                let lines: Vec<String> = diff
                    .add
                    .iter()
                    .map(|l| format!("+{}", l))
                    .chain(diff.remove.iter().map(|l| format!("-{}", l)))
                    .collect();
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format validation failures.
    pub fn format_failures(&self, failures: &[ParseError]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let messages: Vec<String> = failures.iter().map(ToString::to_string).collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "valid": failures.is_empty(),
                    "errors": messages,
                }))?)
            }
            OutputFormat::Table if failures.is_empty() => Ok(self.success("Metadata is valid")),
            OutputFormat::Table => {
                let lines: Vec<String> = failures
                    .iter()
                    .map(|f| self.error(&f.to_string()))
                    .collect();
                Ok(lines.join("\n"))
            }
            OutputFormat::Quiet => {
                let lines: Vec<String> = failures.iter().map(ToString::to_string).collect();
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Present fields of a record as (key, value) pairs in display order.
fn metadata_rows(meta: &Metadata, names: &FieldNames) -> Vec<(String, serde_json::Value)> {
    let mut rows = vec![(
        names.key(Field::Kind).to_string(),
        serde_json::Value::from(meta.kind.clone()),
    )];

    let optional = [
        (Field::Project, meta.project.clone().map(serde_json::Value::from)),
        (Field::Phase, meta.phase.clone().map(serde_json::Value::from)),
        (Field::Status, meta.status.clone().map(serde_json::Value::from)),
        (Field::Agent, meta.agent.clone().map(serde_json::Value::from)),
        (Field::Effort, meta.effort.map(serde_json::Value::from)),
    ];

    for (field, value) in optional {
        if let Some(value) = value {
            rows.push((names.key(field).to_string(), value));
        }
    }

    rows
}
