//! Restoration mode of the redaction renderer.

use markdown::mdast;
use mdredact_ast::{Document, MarkdownElement, RedactionNode, SyntaxNode, walk};
use tracing::debug;

use crate::error::RestoreError;
use crate::placeholder;
use crate::registry::RestorationRegistry;

/// Restores a redacted copy against the redactions harvested from the
/// source document.
///
/// Pairing is positional: the i-th redaction of the source corresponds to
/// the i-th placeholder of the redacted copy, in document order. Everything
/// else in the redacted tree — including edits the user made around the
/// placeholders — is kept as-is. All-or-nothing: counts are checked before
/// any restoration method runs, and the inputs are never mutated, so a
/// failed restoration leaves no partially-restored document behind.
pub fn restore(
    source: &Document,
    redacted: &Document,
    registry: &RestorationRegistry,
) -> Result<Document, RestoreError> {
    let redactions = source.redactions();
    let found = count_placeholders(&redacted.root);
    if found != redactions.len() {
        return Err(RestoreError::CountMismatch {
            expected: redactions.len(),
            found,
        });
    }

    let mut splicer = Splicer {
        redactions: &redactions,
        next: 0,
        registry,
    };
    let root = splicer.rebuild(&redacted.root)?;
    debug!(count = redactions.len(), "restored redacted document");
    Ok(Document::new(root))
}

fn count_placeholders(root: &SyntaxNode) -> usize {
    let mut count = 0;
    walk(root, &mut |node| {
        if let SyntaxNode::Markdown(element) = node {
            if let mdast::Node::Text(text) = &element.node {
                count += placeholder::scan_placeholders(&text.value).len();
            }
        }
    });
    count
}

/// Rebuilds the redacted tree, replacing each placeholder token with the
/// restored node produced by the matching restoration method.
struct Splicer<'a> {
    redactions: &'a [&'a RedactionNode],
    next: usize,
    registry: &'a RestorationRegistry,
}

impl Splicer<'_> {
    fn rebuild(&mut self, node: &SyntaxNode) -> Result<SyntaxNode, RestoreError> {
        let element = match node {
            SyntaxNode::Markdown(element) => element,
            // A redacted copy parsed in standard mode has no redactions;
            // any that do appear are kept untouched.
            SyntaxNode::Redaction(_) => return Ok(node.clone()),
        };

        let mut children = Vec::with_capacity(element.children.len());
        for child in &element.children {
            if let SyntaxNode::Markdown(inner) = child {
                if let mdast::Node::Text(text) = &inner.node {
                    self.splice_text(text, &mut children)?;
                    continue;
                }
            }
            children.push(self.rebuild(child)?);
        }
        Ok(SyntaxNode::Markdown(MarkdownElement::new(
            element.node.clone(),
            children,
        )))
    }

    /// Splits a literal text run around its placeholder tokens.
    fn splice_text(
        &mut self,
        text: &mdast::Text,
        out: &mut Vec<SyntaxNode>,
    ) -> Result<(), RestoreError> {
        let tokens = placeholder::scan_placeholders(&text.value);
        if tokens.is_empty() {
            out.push(SyntaxNode::from_mdast(mdast::Node::Text(text.clone())));
            return Ok(());
        }

        let mut cursor = 0;
        for token in tokens {
            if token.start > cursor {
                out.push(literal(&text.value[cursor..token.start]));
            }
            let redaction = self.redactions[self.next];
            let method = self.registry.resolve(&redaction.redaction_type)?;
            let restored = method(redaction, token.content.as_deref())?;
            out.push(SyntaxNode::from_mdast(restored));
            self.next += 1;
            cursor = token.end;
        }
        if cursor < text.value.len() {
            out.push(literal(&text.value[cursor..]));
        }
        Ok(())
    }
}

fn literal(value: &str) -> SyntaxNode {
    SyntaxNode::from_mdast(mdast::Node::Text(mdast::Text {
        value: value.to_string(),
        position: None,
    }))
}
