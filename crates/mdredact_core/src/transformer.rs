//! The transform facade.

use mdredact_parser::MarkdownParser;
use mdredact_render::{RestorationRegistry, restore, to_markdown, to_redacted_markdown};
use tracing::debug;

use crate::error::TransformError;

/// The two document-level operations over one restoration registry.
///
/// A transformer owns its registry: configure it up front (the built-ins
/// cover links and images), then share the transformer freely — both
/// operations are pure functions of their inputs and the registry is
/// read-only once construction is done, so concurrent calls from multiple
/// threads need no locking.
#[derive(Debug)]
pub struct Transformer {
    registry: RestorationRegistry,
}

impl Transformer {
    /// Creates a transformer with the built-in link and image restoration
    /// methods.
    pub fn new() -> Self {
        Self {
            registry: RestorationRegistry::with_builtins(),
        }
    }

    /// Creates a transformer over a caller-configured registry.
    ///
    /// Use this to support additional redaction types beyond links and
    /// images.
    pub fn with_registry(registry: RestorationRegistry) -> Self {
        Self { registry }
    }

    /// Returns the registry this transformer resolves restoration methods
    /// from.
    pub fn registry(&self) -> &RestorationRegistry {
        &self.registry
    }

    /// Produces the redacted copy of a source document.
    ///
    /// Parses in redaction mode and serializes in placeholder mode: every
    /// inline link and image comes out as an opaque `[i]` marker.
    /// Deterministic for a given input.
    pub fn source_to_redacted(&self, source: &str) -> Result<String, TransformError> {
        let document = MarkdownParser::redacting().parse(source)?;
        debug!(
            redactions = document.redaction_count(),
            "redacting source document"
        );
        Ok(to_redacted_markdown(&document)?)
    }

    /// Reconstructs a full document from a source and a (possibly edited)
    /// redacted copy.
    ///
    /// The source supplies the hidden payloads; the redacted copy supplies
    /// the structure, surrounding edits, and any replacement content. Fails
    /// if the redaction counts disagree or a redaction type has no
    /// registered restoration method; on failure no document is returned at
    /// all.
    pub fn source_and_redacted_to_markdown(
        &self,
        source: &str,
        redacted: &str,
    ) -> Result<String, TransformError> {
        let source_document = MarkdownParser::redacting().parse(source)?;
        let redacted_document = MarkdownParser::new().parse(redacted)?;
        let restored = restore(&source_document, &redacted_document, &self.registry)?;
        Ok(to_markdown(&restored)?)
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new()
    }
}

/// Redacts `source` using the built-in restoration methods.
pub fn source_to_redacted(source: &str) -> Result<String, TransformError> {
    Transformer::new().source_to_redacted(source)
}

/// Reconstructs a document using the built-in restoration methods.
pub fn source_and_redacted_to_markdown(
    source: &str,
    redacted: &str,
) -> Result<String, TransformError> {
    Transformer::new().source_and_redacted_to_markdown(source, redacted)
}
