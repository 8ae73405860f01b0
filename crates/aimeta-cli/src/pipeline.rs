//! Wiring of schema, extractor and projector for one CLI run.

use crate::config::Naming;
use crate::error::Result;
use aimeta_domain::FieldNames;
use aimeta_extractor::{Extractor, ExtractorConfig};
use aimeta_gatekeeper::{Gatekeeper, SchemaConfig};
use aimeta_labels::{LabelProjector, LabelStyle};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Everything a command needs to process a body.
#[derive(Debug)]
pub struct Pipeline {
    /// Block extractor and validator
    pub extractor: Extractor<SchemaConfig>,

    /// Label renderer
    pub projector: LabelProjector,
}

impl Pipeline {
    /// Build a pipeline over a loaded schema.
    pub fn new(
        schema: SchemaConfig,
        naming: Naming,
        style: LabelStyle,
        extractor_config: ExtractorConfig,
    ) -> Result<Self> {
        let projector = LabelProjector::from_schema(&schema, style);
        let gatekeeper = Gatekeeper::new(schema, naming.into());
        let extractor = Extractor::new(gatekeeper, extractor_config)?;

        Ok(Self {
            extractor,
            projector,
        })
    }

    /// Load the schema file and build a pipeline.
    pub fn from_schema_file(
        path: &Path,
        naming: Naming,
        style: LabelStyle,
        extractor_config: ExtractorConfig,
    ) -> Result<Self> {
        debug!(path = %path.display(), "loading schema");
        let schema = SchemaConfig::from_file(path)?;
        Self::new(schema, naming, style, extractor_config)
    }

    /// The schema in use.
    pub fn schema(&self) -> &SchemaConfig {
        self.extractor.gatekeeper().schema()
    }

    /// Block keys in use.
    pub fn field_names(&self) -> &FieldNames {
        &self.extractor.gatekeeper().config().field_names
    }

    /// A projector over the same schema with a different style.
    pub fn projector_with_style(&self, style: LabelStyle) -> LabelProjector {
        LabelProjector::from_schema(self.schema(), style)
    }
}

/// Read an issue body from a file, or stdin when the path is absent or "-".
pub fn read_body(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}
