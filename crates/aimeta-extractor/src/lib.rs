//! aimeta Extractor
//!
//! Finds the `<!-- ai-meta -->` block in an issue body and turns it into a
//! validated [`Metadata`](aimeta_domain::Metadata) record.
//!
//! # Overview
//!
//! Issue bodies are free-form markdown. Automation that needs to know what an
//! issue is embeds a small block of `key: value` lines inside an HTML comment:
//!
//! ```text
//! <!-- ai-meta
//! kind: task
//! phase: build
//! effort: 3
//! -->
//! ```
//!
//! # Architecture
//!
//! ```text
//! Body → extract_block → parse_fields → Gatekeeper → Metadata
//! ```
//!
//! # Example Usage
//!
//! ```
//! use aimeta_extractor::{Extractor, ExtractorConfig};
//! use aimeta_gatekeeper::{Gatekeeper, SchemaConfig, ValidationConfig};
//!
//! let schema = SchemaConfig::from_toml(r#"
//!     [axes.kind]
//!     values = ["task", "project"]
//!
//!     [axes.phase]
//!     values = ["plan", "build", "review"]
//! "#).unwrap();
//!
//! let gatekeeper = Gatekeeper::new(schema, ValidationConfig::default());
//! let extractor = Extractor::new(gatekeeper, ExtractorConfig::default()).unwrap();
//!
//! let body = "Fix it.\n\n<!-- ai-meta\nkind: task\nphase: build\neffort: 3\n-->";
//! let meta = extractor.parse(Some(body)).unwrap();
//!
//! assert_eq!(meta.kind, "task");
//! assert_eq!(meta.phase.as_deref(), Some("build"));
//! assert_eq!(meta.effort, Some(3));
//! ```

#![warn(missing_docs)]

mod block;
mod config;
mod error;
mod extractor;
mod parser;


pub use block::extract_block;
pub use config::{ExtractorConfig, DEFAULT_COMMENT_PREFIX, DEFAULT_MARKER};
pub use error::{ExtractorError, ParseError};
pub use extractor::Extractor;
pub use parser::parse_fields;
