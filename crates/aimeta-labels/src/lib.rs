//! aimeta Labels
//!
//! Projects a validated [`Metadata`](aimeta_domain::Metadata) record onto the
//! flat label list that gets applied to the issue.
//!
//! Labels come out in a fixed order: kind, phase, status, agent. Absent
//! fields produce nothing, and the `human` agent never produces a label.
//!
//! ```
//! use aimeta_domain::Metadata;
//! use aimeta_labels::{LabelProjector, LabelStyle};
//!
//! let mut meta = Metadata::new("task");
//! meta.phase = Some("build".to_string());
//! meta.agent = Some("human".to_string());
//!
//! let bare = LabelProjector::new(LabelStyle::Bare);
//! assert_eq!(bare.project(&meta), vec!["task", "build"]);
//!
//! let prefixed = LabelProjector::new(LabelStyle::Prefixed);
//! assert_eq!(prefixed.project(&meta), vec!["kind:task", "phase:build"]);
//! ```

#![warn(missing_docs)]

mod diff;
mod projector;

pub use diff::LabelDiff;
pub use projector::{LabelProjector, LabelStyle, HUMAN_AGENT};
