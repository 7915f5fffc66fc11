//! # mdredact_render
//!
//! Redaction rendering and restoration for mdredact.
//!
//! This crate provides:
//! - The placeholder lexical form: emitting `[i]` markers and scanning them
//!   back out of edited text
//! - [`RestorationRegistry`], the open mapping from redaction type tag to
//!   restoration method
//! - The two operating modes of the redaction renderer:
//!   [`to_redacted_markdown`] (placeholder mode) and [`restore`] followed by
//!   [`to_markdown`] (restoration mode)
//!
//! ## Architecture
//!
//! Serialization proper is done by the `mdast_util_to_markdown` crate. This
//! crate rebuilds an mdast tree from a syntax tree, deciding per mode what a
//! redaction node turns into, and hands the result to the external
//! serializer. Restoration works on the redacted copy's tree so every edit
//! made around the placeholders survives reconstruction.
//!
//! ## Example
//!
//! ```rust
//! use mdredact_parser::MarkdownParser;
//! use mdredact_render::to_redacted_markdown;
//!
//! let document = MarkdownParser::redacting()
//!     .parse("See [a link](http://x.com) here")
//!     .unwrap();
//! let redacted = to_redacted_markdown(&document).unwrap();
//! assert_eq!(redacted.trim_end(), "See [0] here");
//! ```

mod error;
mod methods;
mod placeholder;
mod registry;
mod render;
mod restore;

pub use error::{RenderError, RestoreError};
pub use placeholder::{PlaceholderToken, placeholder_node, scan_placeholders};
pub use registry::{RestorationFn, RestorationRegistry};
pub use render::{to_markdown, to_redacted_markdown};
pub use restore::restore;
