//! Redaction nodes: placeholders standing in for hidden inline content.

use markdown::mdast;

use crate::span::Span;

/// Redaction type tag for a wrapped inline link.
pub const REDACTED_LINK: &str = "redactedlink";

/// Redaction type tag for a wrapped inline image.
pub const REDACTED_IMAGE: &str = "redactedimage";

/// A node standing in for an inline link or image whose destination is
/// hidden.
///
/// The wrapped original subtree is kept whole so a restoration method can
/// rebuild the node later. The type tag names the original kind
/// (`redactedlink`, `redactedimage`, or a caller-defined tag); every tag in a
/// tree must have a matching entry in the restoration registry by the time
/// restoration runs.
#[derive(Debug, Clone, PartialEq)]
pub struct RedactionNode {
    /// Tag identifying which original kind this redaction replaces.
    pub redaction_type: String,
    /// Zero-based position of this redaction in document order.
    pub index: usize,
    /// The original node, children and all.
    pub original: mdast::Node,
    /// Source location of the original node, when the parser reported one.
    pub span: Option<Span>,
}

impl RedactionNode {
    /// Wraps an original node under the given type tag.
    pub fn new(redaction_type: impl Into<String>, index: usize, original: mdast::Node) -> Self {
        let span = original.position().map(Span::from_position);
        Self {
            redaction_type: redaction_type.into(),
            index,
            original,
            span,
        }
    }
}
