//! Serialization of document trees back to markdown text.

use markdown::mdast;
use mdast_util_to_markdown::to_markdown as serialize_mdast;
use mdredact_ast::{Document, RedactionNode, SyntaxNode};

use crate::error::RenderError;
use crate::placeholder;

/// Serializes a document in placeholder mode.
///
/// Every redaction node is emitted as its opaque `[i]` marker; nothing of
/// the hidden payload reaches the output. The result is valid markdown that
/// re-parses into one distinguishable token per redaction.
pub fn to_redacted_markdown(document: &Document) -> Result<String, RenderError> {
    let tree = raise(&document.root, &mut |redaction| {
        Ok(placeholder::placeholder_node(redaction.index))
    })?;
    serialize(&tree)
}

/// Serializes a document that contains no redaction nodes.
///
/// Used for fully-restored trees; a redaction reaching this renderer fails
/// with [`RenderError::UnrenderedRedaction`] rather than leaking a
/// half-transformed document.
pub fn to_markdown(document: &Document) -> Result<String, RenderError> {
    let tree = raise(&document.root, &mut |redaction| {
        Err(RenderError::UnrenderedRedaction {
            index: redaction.index,
        })
    })?;
    serialize(&tree)
}

fn serialize(tree: &mdast::Node) -> Result<String, RenderError> {
    serialize_mdast(tree).map_err(|e| RenderError::serialize(e.to_string()))
}

/// Rebuilds an mdast tree from a syntax tree, dispatching redaction nodes to
/// `on_redaction`. The input tree is left untouched.
fn raise(
    node: &SyntaxNode,
    on_redaction: &mut dyn FnMut(&RedactionNode) -> Result<mdast::Node, RenderError>,
) -> Result<mdast::Node, RenderError> {
    match node {
        SyntaxNode::Redaction(redaction) => on_redaction(redaction),
        SyntaxNode::Markdown(element) => {
            let mut out = element.node.clone();
            if let Some(slot) = out.children_mut() {
                let mut children = Vec::with_capacity(element.children.len());
                for child in &element.children {
                    children.push(raise(child, on_redaction)?);
                }
                *slot = children;
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use mdredact_parser::MarkdownParser;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_placeholder_mode_emits_markers() {
        let document = MarkdownParser::redacting()
            .parse("See [a link](http://x.com) here")
            .unwrap();

        let redacted = to_redacted_markdown(&document).unwrap();
        assert_eq!(redacted.trim_end(), "See [0] here");
    }

    #[test]
    fn test_placeholder_mode_leaks_nothing() {
        let document = MarkdownParser::redacting()
            .parse("See [secret words](http://secret.example/path) here")
            .unwrap();

        let redacted = to_redacted_markdown(&document).unwrap();
        assert!(!redacted.contains("secret"));
    }

    #[test]
    fn test_placeholder_indices_count_up() {
        let source =
            "A [one](http://1.com) and ![two](http://2.com/i.png).\n\nThen [three](http://3.com).";
        let document = MarkdownParser::redacting().parse(source).unwrap();

        let redacted = to_redacted_markdown(&document).unwrap();
        assert_eq!(
            redacted.trim_end(),
            "A [0] and [1].\n\nThen [2]."
        );
    }

    #[test]
    fn test_placeholder_mode_is_deterministic() {
        let source = "See [a link](http://x.com) here";
        let document = MarkdownParser::redacting().parse(source).unwrap();

        let first = to_redacted_markdown(&document).unwrap();
        let second = to_redacted_markdown(&document).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_does_not_consume_document() {
        let document = MarkdownParser::redacting()
            .parse("See [a link](http://x.com) here")
            .unwrap();

        let _ = to_redacted_markdown(&document).unwrap();
        // The tree still carries its redactions afterwards.
        assert_eq!(document.redaction_count(), 1);
    }

    #[test]
    fn test_plain_mode_round_trips_markdown() {
        let document = MarkdownParser::new()
            .parse("Plain *text* with [a link](http://x.com).")
            .unwrap();

        let output = to_markdown(&document).unwrap();
        assert_eq!(output.trim_end(), "Plain *text* with [a link](http://x.com).");
    }

    #[test]
    fn test_plain_mode_rejects_redactions() {
        let document = MarkdownParser::redacting()
            .parse("See [a link](http://x.com) here")
            .unwrap();

        let error = to_markdown(&document).unwrap_err();
        assert!(matches!(
            error,
            RenderError::UnrenderedRedaction { index: 0 }
        ));
    }

    #[test]
    fn test_redacted_copy_reparses_cleanly() {
        let document = MarkdownParser::redacting()
            .parse("See [a link](http://x.com) here")
            .unwrap();
        let redacted = to_redacted_markdown(&document).unwrap();

        // The redacted copy is itself valid markdown.
        let reparsed = MarkdownParser::new().parse(&redacted).unwrap();
        assert_eq!(reparsed.redaction_count(), 0);
    }
}
