//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use aimeta_extractor::ExtractorConfig;
use aimeta_gatekeeper::ValidationConfig;
use aimeta_labels::LabelStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Block extraction settings
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// How labels are rendered
    #[serde(default)]
    pub label_style: LabelStyle,

    /// Which input keys the block uses
    #[serde(default)]
    pub naming: Naming,

    /// Default schema file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<PathBuf>,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

/// Block key naming convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Naming {
    /// `kind`, `status`, `project`
    #[default]
    Canonical,
    /// `type`, `state`, `project_id`
    Legacy,
}

impl From<Naming> for ValidationConfig {
    fn from(naming: Naming) -> Self {
        match naming {
            Naming::Canonical => ValidationConfig::canonical(),
            Naming::Legacy => ValidationConfig::legacy(),
        }
    }
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".aimeta").join("config.toml"))
    }

    /// Load configuration from the default location, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from a file, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.extractor.validate().map_err(CliError::Config)?;
        Ok(config)
    }

    /// Schema file to use, preferring an explicit path.
    pub fn schema_path(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        explicit
            .or_else(|| self.settings.schema.clone())
            .ok_or_else(|| {
                CliError::Config("No schema file given. Use --schema or set settings.schema".into())
            })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            label_style: LabelStyle::Bare,
            naming: Naming::Canonical,
            schema: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
