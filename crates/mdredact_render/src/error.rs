//! Render and restore error types.

use thiserror::Error;

/// Errors that can occur while serializing a document.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The external serializer rejected the tree.
    #[error("Serialization failed: {0}")]
    Serialize(String),

    /// A redaction node reached a renderer with no way to emit it.
    #[error("Redaction {index} cannot be rendered here")]
    UnrenderedRedaction {
        /// Document-order index of the offending redaction.
        index: usize,
    },
}

impl RenderError {
    /// Creates a serialization error.
    pub fn serialize(message: impl Into<String>) -> Self {
        Self::Serialize(message.into())
    }
}

/// Errors that can occur while restoring a redacted document.
#[derive(Debug, Error)]
pub enum RestoreError {
    /// A redaction's type tag has no registered restoration method.
    #[error("Unknown redaction type: {redaction_type}")]
    UnknownRedactionType {
        /// The unregistered tag.
        redaction_type: String,
    },

    /// A restoration method is already registered for this tag.
    #[error("Redaction type already registered: {redaction_type}")]
    DuplicateRedactionType {
        /// The doubly-registered tag.
        redaction_type: String,
    },

    /// The source and the redacted copy disagree on how many redactions
    /// there are.
    #[error("Redaction count mismatch: source has {expected}, redacted copy has {found}")]
    CountMismatch {
        /// Number of redactions harvested from the source tree.
        expected: usize,
        /// Number of placeholders found in the redacted tree.
        found: usize,
    },

    /// A restoration method received a redaction whose payload is not the
    /// node kind it restores.
    #[error("Redaction {index} does not wrap a {expected} node")]
    PayloadMismatch {
        /// Document-order index of the offending redaction.
        index: usize,
        /// The node kind the method expected to find.
        expected: &'static str,
    },
}

impl RestoreError {
    /// Creates an unknown redaction type error.
    pub fn unknown_type(redaction_type: impl Into<String>) -> Self {
        Self::UnknownRedactionType {
            redaction_type: redaction_type.into(),
        }
    }

    /// Creates a duplicate redaction type error.
    pub fn duplicate_type(redaction_type: impl Into<String>) -> Self {
        Self::DuplicateRedactionType {
            redaction_type: redaction_type.into(),
        }
    }
}
