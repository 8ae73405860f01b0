//! Extractor implementation
//!
//! Runs the whole pipeline for one issue body: locate the block, parse its
//! fields, then hand them to the gatekeeper.

use aimeta_domain::{FieldMap, LabelSchema, Metadata};
use aimeta_gatekeeper::Gatekeeper;
use regex::Regex;
use tracing::debug;

use crate::block::{block_pattern, extract_with};
use crate::parser::parse_fields_with;
use crate::{ExtractorConfig, ExtractorError, ParseError};

/// Main extractor for ai-meta blocks
///
/// Immutable after construction; one instance can serve any number of
/// bodies, from any number of threads when the schema allows it.
#[derive(Debug, Clone)]
pub struct Extractor<S> {
    gatekeeper: Gatekeeper<S>,
    config: ExtractorConfig,
    block: Regex,
}

impl<S: LabelSchema> Extractor<S> {
    /// Create a new Extractor
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(gatekeeper: Gatekeeper<S>, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        let block = Regex::new(&block_pattern(&config.marker))?;

        Ok(Self {
            gatekeeper,
            config,
            block,
        })
    }

    /// Create an Extractor with the default block marker
    pub fn with_gatekeeper(gatekeeper: Gatekeeper<S>) -> Result<Self, ExtractorError> {
        Self::new(gatekeeper, ExtractorConfig::default())
    }

    /// The gatekeeper used for validation
    pub fn gatekeeper(&self) -> &Gatekeeper<S> {
        &self.gatekeeper
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Trimmed interior of the first block, if any
    pub fn extract_block(&self, body: Option<&str>) -> Option<String> {
        extract_with(&self.block, body?)
    }

    /// Parse block text into fields using the configured comment prefix
    pub fn parse_fields(&self, raw: &str) -> FieldMap {
        parse_fields_with(raw, &self.config.comment_prefix)
    }

    /// Locate and parse the block without validating it
    pub fn fields(&self, body: Option<&str>) -> Result<FieldMap, ParseError> {
        let body = match body {
            None | Some("") => return Err(ParseError::EmptyBody),
            Some(body) => body,
        };

        if body.len() > self.config.max_body_length {
            return Err(ParseError::BodyTooLong(body.len(), self.config.max_body_length));
        }

        let raw = self
            .extract_block(Some(body))
            .ok_or(ParseError::NoMetadataBlock)?;
        let fields = self.parse_fields(&raw);
        debug!(count = fields.len(), "block fields parsed");

        Ok(fields)
    }

    /// Parse and validate the metadata in an issue body
    ///
    /// # Arguments
    ///
    /// * `body` - The issue body, or `None` when the issue has none
    ///
    /// # Returns
    ///
    /// The validated record, or the single error explaining why there is none
    pub fn parse(&self, body: Option<&str>) -> Result<Metadata, ParseError> {
        let fields = self.fields(body)?;
        Ok(self.gatekeeper.validate(&fields)?)
    }

    /// Every validation failure for a body, in reporting order
    ///
    /// Structural failures (no body, no block) are returned as the error.
    pub fn review(&self, body: Option<&str>) -> Result<Vec<ParseError>, ParseError> {
        let fields = self.fields(body)?;
        Ok(self
            .gatekeeper
            .review(&fields)
            .into_iter()
            .map(ParseError::from)
            .collect())
    }
}
