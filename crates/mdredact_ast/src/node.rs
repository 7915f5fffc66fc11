//! Document tree definitions.

use markdown::mdast;

use crate::redaction::RedactionNode;
use crate::walk::walk;

/// A node in a document tree.
///
/// Either a plain markdown element or a redaction. This is a proper sum
/// type: a redaction never masquerades as the node kind it replaces.
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxNode {
    /// A standard markdown element.
    Markdown(MarkdownElement),
    /// A placeholder for hidden inline content.
    Redaction(RedactionNode),
}

/// A markdown element whose children are re-owned as syntax nodes.
///
/// The wrapped mdast node keeps its kind-specific fields (url, title, literal
/// value, position) but its child list is drained; `children` holds the
/// lowered children instead, so redactions can appear anywhere in the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownElement {
    /// The mdast node, with its own child list emptied.
    pub node: mdast::Node,
    /// Lowered children, in document order.
    pub children: Vec<SyntaxNode>,
}

impl MarkdownElement {
    /// Creates an element from a drained mdast node and its lowered children.
    pub fn new(node: mdast::Node, children: Vec<SyntaxNode>) -> Self {
        Self { node, children }
    }
}

impl SyntaxNode {
    /// Lowers a plain mdast subtree without introducing redactions.
    ///
    /// This is the pass-through conversion: the resulting tree is
    /// structurally identical to the input.
    pub fn from_mdast(mut node: mdast::Node) -> Self {
        let children = node.children_mut().map(std::mem::take).unwrap_or_default();
        let children = children.into_iter().map(Self::from_mdast).collect();
        Self::Markdown(MarkdownElement::new(node, children))
    }

    /// Returns the redaction carried by this node, if it is one.
    pub fn as_redaction(&self) -> Option<&RedactionNode> {
        match self {
            Self::Redaction(redaction) => Some(redaction),
            Self::Markdown(_) => None,
        }
    }
}

/// An ordered tree of syntax nodes, root-owned.
///
/// Created fresh on each parse call; serialization produces text without
/// altering the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// The root node, normally a markdown `Root` element.
    pub root: SyntaxNode,
}

impl Document {
    /// Creates a document from its root node.
    pub fn new(root: SyntaxNode) -> Self {
        Self { root }
    }

    /// Collects the redactions of this document in document order.
    pub fn redactions(&self) -> Vec<&RedactionNode> {
        let mut redactions = Vec::new();
        walk(&self.root, &mut |node| {
            if let SyntaxNode::Redaction(redaction) = node {
                redactions.push(redaction);
            }
        });
        redactions
    }

    /// Returns the number of redactions in this document.
    pub fn redaction_count(&self) -> usize {
        self.redactions().len()
    }
}
