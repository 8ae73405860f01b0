//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// aimeta CLI - Validate ai-meta blocks in issue bodies and derive labels.
#[derive(Debug, Parser)]
#[command(name = "aimeta")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "AIMETA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Label schema file (TOML)
    #[arg(short, long, global = true, env = "AIMETA_SCHEMA")]
    pub schema: Option<PathBuf>,

    /// Block key naming convention
    #[arg(short, long, value_enum, global = true)]
    pub naming: Option<NamingArg>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (values only)
    Quiet,
}

/// Naming convention options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum NamingArg {
    /// kind / status / project
    Canonical,
    /// type / state / project_id
    Legacy,
}

/// Label style options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StyleArg {
    /// Bare values (task)
    Bare,
    /// Axis-prefixed values (kind:task)
    Prefixed,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse and validate the metadata block of an issue body
    Parse(InputArgs),

    /// Print the labels for an issue body
    Labels(LabelsArgs),

    /// List every validation failure of an issue body
    Check(InputArgs),
}

/// Where the issue body comes from.
#[derive(Debug, Parser)]
pub struct InputArgs {
    /// File holding the issue body (stdin if omitted or "-")
    pub file: Option<PathBuf>,
}

/// Arguments for the labels command.
#[derive(Debug, Parser)]
pub struct LabelsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Label style
    #[arg(long, value_enum)]
    pub style: Option<StyleArg>,

    /// Labels currently on the issue; prints the add/remove diff instead
    #[arg(long, value_delimiter = ',')]
    pub current: Vec<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<NamingArg> for crate::config::Naming {
    fn from(naming: NamingArg) -> Self {
        match naming {
            NamingArg::Canonical => crate::config::Naming::Canonical,
            NamingArg::Legacy => crate::config::Naming::Legacy,
        }
    }
}

impl From<StyleArg> for aimeta_labels::LabelStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Bare => aimeta_labels::LabelStyle::Bare,
            StyleArg::Prefixed => aimeta_labels::LabelStyle::Prefixed,
        }
    }
}
