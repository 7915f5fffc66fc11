//! # mdredact_ast
//!
//! Syntax tree types for mdredact.
//!
//! This crate provides the document tree shared by the parser, renderer, and
//! transform facade. The tree wraps the mdast nodes produced by the
//! `markdown` crate and adds exactly one new node kind: the redaction node,
//! which stands in for an inline link or image whose destination is hidden.
//!
//! ## Architecture
//!
//! - [`SyntaxNode`] is a sum type: either a plain markdown element or a
//!   redaction. A redaction is never a mutated markdown node; it is a
//!   distinct variant that owns the original node as its hidden payload.
//! - [`Document`] owns the root of a tree. A document is created fresh on
//!   every parse and is never mutated by serialization.
//! - [`walk`] traverses a tree depth-first in document order.
//!
//! ## Example
//!
//! ```rust
//! use markdown::{ParseOptions, to_mdast};
//! use mdredact_ast::{Document, SyntaxNode};
//!
//! let mdast = to_mdast("Some *text*", &ParseOptions::default()).unwrap();
//! let document = Document::new(SyntaxNode::from_mdast(mdast));
//! assert_eq!(document.redaction_count(), 0);
//! ```

mod node;
mod redaction;
mod span;
mod walk;

pub use node::{Document, MarkdownElement, SyntaxNode};
pub use redaction::{REDACTED_IMAGE, REDACTED_LINK, RedactionNode};
pub use span::Span;
pub use walk::walk;
