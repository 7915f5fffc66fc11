//! Markdown parser built on markdown-rs (wooorm/markdown-rs).
//!
//! Parsing proper is done by the `markdown` crate, which produces an
//! mdast-compatible tree. This module lowers that tree into the crate's own
//! syntax nodes, wrapping link-like nodes per the active tokenizer.

use markdown::{ParseOptions, mdast, to_mdast};
use mdredact_ast::{Document, MarkdownElement, SyntaxNode};

use crate::options::ParserOptions;
use crate::tokenizer::{InlineTokenizer, RedactingTokenizer, StandardTokenizer};
use crate::ParseError;

/// Markdown parser with an optional redaction mode.
///
/// Dialect is CommonMark; the parse result keeps every node kind the
/// external serializer knows how to write back out.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownParser {
    options: ParserOptions,
}

impl MarkdownParser {
    /// Creates a parser with default options (no redaction).
    pub fn new() -> Self {
        Self::with_options(ParserOptions::default())
    }

    /// Creates a parser with the given options.
    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Creates a parser in redaction mode.
    pub fn redacting() -> Self {
        Self::with_options(ParserOptions::redacting())
    }

    /// Returns the options this parser was constructed with.
    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// Parses the source text into a document.
    ///
    /// In redaction mode, every inline link and image becomes a redaction
    /// node numbered in document order; otherwise the result is the plain
    /// lowering of the mdast tree.
    pub fn parse(&self, source: &str) -> Result<Document, ParseError> {
        let mdast = to_mdast(source, &ParseOptions::default())
            .map_err(|e| ParseError::invalid_source(e.to_string()))?;

        let root = if self.options.redact {
            lower(mdast, &mut RedactingTokenizer::new())
        } else {
            lower(mdast, &mut StandardTokenizer)
        };
        Ok(Document::new(root))
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowers an mdast subtree, dispatching link-like nodes to the tokenizer.
///
/// A node handed to the tokenizer is consumed whole: when it becomes a
/// redaction, its subtree is the hidden payload and is not lowered again.
fn lower(mut node: mdast::Node, tokenizer: &mut dyn InlineTokenizer) -> SyntaxNode {
    if matches!(node, mdast::Node::Link(_) | mdast::Node::Image(_)) {
        return tokenizer.tokenize_link_like(node);
    }
    let children = node.children_mut().map(std::mem::take).unwrap_or_default();
    let children = children
        .into_iter()
        .map(|child| lower(child, tokenizer))
        .collect();
    SyntaxNode::Markdown(MarkdownElement::new(node, children))
}
