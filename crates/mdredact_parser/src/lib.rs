//! # mdredact_parser
//!
//! Markdown parsing for mdredact.
//!
//! This crate provides:
//! - [`MarkdownParser`], which parses markdown text into a
//!   [`mdredact_ast::Document`]
//! - [`ParserOptions`], the construction-time configuration carrying the
//!   `redact` flag
//!
//! ## Architecture
//!
//! Tokenization is fully delegated to the `markdown` crate (markdown-rs).
//! This crate only post-processes the mdast tree it produces: outside redact
//! mode the lowering is a pure pass-through, and in redact mode every inline
//! link or image the standard parser matched is wrapped into a redaction
//! node. The two behaviors are separate tokenizer implementations selected
//! once at parse time by the `redact` flag, so exactly one matcher handles
//! link-like syntax per mode.
//!
//! ## Example
//!
//! ```rust
//! use mdredact_parser::MarkdownParser;
//!
//! let document = MarkdownParser::redacting()
//!     .parse("See [a link](http://example.com) here")
//!     .unwrap();
//! assert_eq!(document.redaction_count(), 1);
//! ```

mod error;
mod markdown;
mod options;
mod tokenizer;

pub use error::ParseError;
pub use markdown::MarkdownParser;
pub use options::ParserOptions;
