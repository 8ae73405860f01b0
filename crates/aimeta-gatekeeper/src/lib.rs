//! aimeta Gatekeeper
//!
//! Validates parsed block fields against the label schema and builds the
//! [`Metadata`](aimeta_domain::Metadata) record.
//!
//! The Gatekeeper provides:
//! - An ordered rule table, one rule per record field
//! - Closed-vocabulary checks for the kind, phase, status and agent axes
//! - Positive-integer checks for effort
//! - A single, deterministic error per rejected block
//! - A TOML-backed [`LabelSchema`](aimeta_domain::LabelSchema) implementation
//!
//! # Examples
//!
//! ```
//! use aimeta_domain::{FieldMap, Scalar};
//! use aimeta_gatekeeper::{Gatekeeper, SchemaConfig, ValidationConfig};
//!
//! let schema = SchemaConfig::from_toml(r#"
//!     [axes.kind]
//!     values = ["task", "project"]
//! "#).unwrap();
//! let gatekeeper = Gatekeeper::new(schema, ValidationConfig::default());
//!
//! let mut fields = FieldMap::new();
//! fields.insert("kind", Scalar::Str("task".to_string()));
//!
//! let meta = gatekeeper.validate(&fields).unwrap();
//! assert_eq!(meta.kind, "task");
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod rules;
mod schema;
mod validator;

pub use config::ValidationConfig;
pub use error::ValidationError;
pub use rules::{Rule, RULES};
pub use schema::{AxisConfig, ConfigError, SchemaConfig};
pub use validator::Gatekeeper;
