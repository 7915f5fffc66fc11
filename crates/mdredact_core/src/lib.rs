//! # mdredact_core
//!
//! Document-level redaction transforms.
//!
//! This crate provides:
//! - [`Transformer`], the facade over the parser, renderer, and restoration
//!   registry
//! - The two operations: [`Transformer::source_to_redacted`] and
//!   [`Transformer::source_and_redacted_to_markdown`]
//!
//! ## Example
//!
//! ```rust
//! use mdredact_core::Transformer;
//!
//! let transformer = Transformer::new();
//!
//! let source = "See [a link](http://x.com) here";
//! let redacted = transformer.source_to_redacted(source).unwrap();
//! assert_eq!(redacted.trim_end(), "See [0] here");
//!
//! let restored = transformer
//!     .source_and_redacted_to_markdown(source, &redacted)
//!     .unwrap();
//! assert_eq!(restored.trim_end(), source);
//! ```

mod error;
mod transformer;

pub use error::TransformError;
pub use transformer::{Transformer, source_and_redacted_to_markdown, source_to_redacted};

pub use mdredact_render::{RestorationFn, RestorationRegistry};
