//! Transform error types.

use thiserror::Error;

use mdredact_parser::ParseError;
use mdredact_render::{RenderError, RestoreError};

/// Errors that can occur during a document-level transform.
///
/// All failures surface here; no partially-transformed document is ever
/// returned alongside an error.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Restore error.
    #[error("Restore error: {0}")]
    Restore(#[from] RestoreError),

    /// Render error.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}
