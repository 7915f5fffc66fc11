//! Depth-first traversal over syntax trees.

use crate::node::SyntaxNode;

/// Visits `node` and its descendants depth-first, left to right.
///
/// This is the document-order traversal used to number and harvest
/// redactions. The payload wrapped inside a redaction node is opaque and is
/// not descended into.
pub fn walk<'a, F>(node: &'a SyntaxNode, visit: &mut F)
where
    F: FnMut(&'a SyntaxNode),
{
    visit(node);
    if let SyntaxNode::Markdown(element) = node {
        for child in &element.children {
            walk(child, visit);
        }
    }
}
