//! aimeta Domain Layer
//!
//! This crate contains the value types shared by every stage of the ai-meta
//! pipeline. It has ZERO external dependencies and defines the fundamental
//! concepts and the schema capability that the other crates depend upon.
//!
//! ## Key Concepts
//!
//! - **Scalar**: A coerced block value (boolean, integer or string)
//! - **FieldMap**: Insertion-ordered `key: value` pairs read from a block
//! - **Axis**: A label dimension with a closed vocabulary (kind, phase, status, agent)
//! - **Field / FieldNames**: Record fields and the input keys that carry them
//! - **Metadata**: The validated record, built all-or-nothing
//! - **LabelSchema**: The external source of permitted values per axis
//!
//! ## Architecture
//!
//! ```text
//! body → Extractor → FieldMap → Gatekeeper → Metadata → LabelProjector → labels
//! ```
//!
//! Every stage is a pure function; nothing here performs I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod axis;
pub mod field;
pub mod field_map;
pub mod metadata;
pub mod scalar;
pub mod traits;

// Re-exports for convenience
pub use axis::Axis;
pub use field::{Field, FieldNames};
pub use field_map::FieldMap;
pub use metadata::Metadata;
pub use scalar::Scalar;
pub use traits::LabelSchema;
