//! Mode-selected handling of link-like nodes.

use markdown::mdast;
use mdredact_ast::{REDACTED_IMAGE, REDACTED_LINK, RedactionNode, SyntaxNode};

/// Strategy applied to every link-like node the standard parser matched.
///
/// Matching (locators, delimiter scanning, nested brackets) is entirely the
/// standard parser's business; implementations only post-process nodes it
/// already produced, and never manufacture a match of their own.
pub(crate) trait InlineTokenizer {
    fn tokenize_link_like(&mut self, node: mdast::Node) -> SyntaxNode;
}

/// Pass-through used outside redact mode.
pub(crate) struct StandardTokenizer;

impl InlineTokenizer for StandardTokenizer {
    fn tokenize_link_like(&mut self, node: mdast::Node) -> SyntaxNode {
        SyntaxNode::from_mdast(node)
    }
}

/// Wraps matched links and images into redaction nodes, numbering them in
/// document order.
pub(crate) struct RedactingTokenizer {
    next_index: usize,
}

impl RedactingTokenizer {
    pub(crate) fn new() -> Self {
        Self { next_index: 0 }
    }
}

impl InlineTokenizer for RedactingTokenizer {
    fn tokenize_link_like(&mut self, node: mdast::Node) -> SyntaxNode {
        let redaction_type = match &node {
            mdast::Node::Link(_) => REDACTED_LINK,
            mdast::Node::Image(_) => REDACTED_IMAGE,
            _ => return SyntaxNode::from_mdast(node),
        };
        let index = self.next_index;
        self.next_index += 1;
        SyntaxNode::Redaction(RedactionNode::new(redaction_type, index, node))
    }
}
