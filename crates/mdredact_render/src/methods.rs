//! Built-in restoration methods for links and images.

use markdown::mdast::{Image, Link, Node, Text};
use mdredact_ast::RedactionNode;

use crate::error::RestoreError;

/// Rebuilds an inline link from its redaction.
///
/// Destination and title come from the hidden payload; the visible text is
/// the replacement content when the editor supplied any, otherwise the
/// original children.
pub(crate) fn restore_link(
    redaction: &RedactionNode,
    content: Option<&str>,
) -> Result<Node, RestoreError> {
    let Node::Link(original) = &redaction.original else {
        return Err(RestoreError::PayloadMismatch {
            index: redaction.index,
            expected: "link",
        });
    };
    let children = match content {
        Some(text) => vec![Node::Text(Text {
            value: text.to_string(),
            position: None,
        })],
        None => original.children.clone(),
    };
    Ok(Node::Link(Link {
        children,
        position: None,
        url: original.url.clone(),
        title: original.title.clone(),
    }))
}

/// Rebuilds an inline image from its redaction.
///
/// Destination and title come from the hidden payload; the alt text is the
/// replacement content when the editor supplied any, otherwise the original
/// alt text.
pub(crate) fn restore_image(
    redaction: &RedactionNode,
    content: Option<&str>,
) -> Result<Node, RestoreError> {
    let Node::Image(original) = &redaction.original else {
        return Err(RestoreError::PayloadMismatch {
            index: redaction.index,
            expected: "image",
        });
    };
    let alt = match content {
        Some(text) => text.to_string(),
        None => original.alt.clone(),
    };
    Ok(Node::Image(Image {
        position: None,
        alt,
        url: original.url.clone(),
        title: original.title.clone(),
    }))
}
