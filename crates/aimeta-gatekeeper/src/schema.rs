//! Label schema loaded from TOML.
//!
//! Each axis is a table under `[axes]` holding its permitted values and,
//! optionally, the label prefix and per-issue label limit. Axis names are
//! exact and lowercase; the legacy names `type` and `state` are read as
//! `kind` and `status`.
//!
//! ```toml
//! [axes.kind]
//! values = ["kind:task", "kind:project"]
//! prefix = "kind:"
//! max_labels = 1
//! ```

use aimeta_domain::{Axis, LabelSchema};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Schema loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read schema file
    #[error("Failed to read schema file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse schema TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Axis table with an unrecognized name
    #[error("Unknown axis: {0}")]
    UnknownAxis(String),

    /// Required axis not declared
    #[error("Missing required axis: {0}")]
    MissingAxis(String),

    /// Axis declared twice, once under its legacy name
    #[error("Axis '{0}' declared more than once")]
    DuplicateAxis(String),

    /// Axis declared without any values
    #[error("Axis '{0}' declares no values")]
    EmptyAxis(String),
}

/// Schema for one axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisConfig {
    /// Permitted values, in declared order
    pub values: Vec<String>,

    /// Label prefix (e.g. "kind:")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Maximum labels per issue on this axis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_labels: Option<usize>,
}

/// Label schema keyed by axis name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Declared axes
    #[serde(default)]
    pub axes: BTreeMap<String, AxisConfig>,
}

impl SchemaConfig {
    /// Parse and validate a schema from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let schema = toml::from_str::<SchemaConfig>(toml_str)?.normalized()?;
        schema.validate()?;
        Ok(schema)
    }

    /// Load and validate a schema from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Rename legacy axis tables to their canonical names
    fn normalized(self) -> Result<Self, ConfigError> {
        let mut axes = BTreeMap::new();
        for (name, config) in self.axes {
            let canonical = match name.as_str() {
                "type" => Axis::Kind.as_str().to_string(),
                "state" => Axis::Status.as_str().to_string(),
                _ => name,
            };
            if axes.contains_key(&canonical) {
                return Err(ConfigError::DuplicateAxis(canonical));
            }
            axes.insert(canonical, config);
        }
        Ok(Self { axes })
    }

    /// Add or replace an axis
    pub fn with_axis<I, V>(mut self, axis: Axis, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.axes.insert(
            axis.as_str().to_string(),
            AxisConfig {
                values: values.into_iter().map(Into::into).collect(),
                prefix: None,
                max_labels: None,
            },
        );
        self
    }

    /// Set the label prefix of an already declared axis
    pub fn with_prefix(mut self, axis: Axis, prefix: impl Into<String>) -> Self {
        if let Some(config) = self.axes.get_mut(axis.as_str()) {
            config.prefix = Some(prefix.into());
        }
        self
    }

    /// Validate the schema
    ///
    /// Every axis name must be a known axis spelled exactly, every axis
    /// must list at least one value, and the kind axis must be declared.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, config) in &self.axes {
            if Axis::parse(name).filter(|axis| axis.as_str() == name).is_none() {
                return Err(ConfigError::UnknownAxis(name.clone()));
            }
            if config.values.is_empty() {
                return Err(ConfigError::EmptyAxis(name.clone()));
            }
        }

        if !self.axes.contains_key(Axis::Kind.as_str()) {
            return Err(ConfigError::MissingAxis(Axis::Kind.as_str().to_string()));
        }

        Ok(())
    }

    fn axis(&self, axis: Axis) -> Option<&AxisConfig> {
        self.axes.get(axis.as_str())
    }
}

impl LabelSchema for SchemaConfig {
    fn values(&self, axis: Axis) -> Option<&[String]> {
        self.axis(axis).map(|c| c.values.as_slice())
    }

    fn label_prefix(&self, axis: Axis) -> Option<&str> {
        self.axis(axis).and_then(|c| c.prefix.as_deref())
    }

    fn max_labels(&self, axis: Axis) -> Option<usize> {
        self.axis(axis).and_then(|c| c.max_labels)
    }
}
