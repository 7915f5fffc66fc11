//! The restoration registry.

use std::collections::HashMap;
use std::fmt;

use markdown::mdast;
use mdredact_ast::{REDACTED_IMAGE, REDACTED_LINK, RedactionNode};

use crate::error::RestoreError;
use crate::methods;

/// A restoration method: turns a redaction node plus optional replacement
/// content back into the original (non-redacted) mdast node.
///
/// Pure with respect to the registry; `Send + Sync` so a configured registry
/// can serve transforms from any number of threads.
pub type RestorationFn =
    Box<dyn Fn(&RedactionNode, Option<&str>) -> Result<mdast::Node, RestoreError> + Send + Sync>;

/// An instance-owned mapping from redaction type tag to restoration method.
///
/// The registry is open: independently developed redaction kinds register
/// their own tags. It is written during configuration and read-only during
/// every transform.
pub struct RestorationRegistry {
    methods: HashMap<String, RestorationFn>,
}

impl RestorationRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            methods: HashMap::new(),
        }
    }

    /// Creates a registry pre-populated with the built-in link and image
    /// methods.
    pub fn with_builtins() -> Self {
        let mut builtins: HashMap<String, RestorationFn> = HashMap::new();
        builtins.insert(
            REDACTED_LINK.to_string(),
            Box::new(methods::restore_link) as RestorationFn,
        );
        builtins.insert(
            REDACTED_IMAGE.to_string(),
            Box::new(methods::restore_image) as RestorationFn,
        );
        Self { methods: builtins }
    }

    /// Registers a restoration method under a type tag.
    ///
    /// Registration never overwrites: a tag that is already present fails
    /// with [`RestoreError::DuplicateRedactionType`], so accidental double
    /// registration is caught instead of silently replacing a method.
    pub fn register(
        &mut self,
        redaction_type: impl Into<String>,
        method: RestorationFn,
    ) -> Result<(), RestoreError> {
        let redaction_type = redaction_type.into();
        if self.methods.contains_key(&redaction_type) {
            return Err(RestoreError::duplicate_type(redaction_type));
        }
        self.methods.insert(redaction_type, method);
        Ok(())
    }

    /// Looks up the restoration method for a type tag.
    pub fn resolve(&self, redaction_type: &str) -> Result<&RestorationFn, RestoreError> {
        self.methods
            .get(redaction_type)
            .ok_or_else(|| RestoreError::unknown_type(redaction_type))
    }

    /// Returns true if a method is registered for the tag.
    pub fn contains(&self, redaction_type: &str) -> bool {
        self.methods.contains_key(redaction_type)
    }

    /// Returns the number of registered methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Returns true if no methods are registered.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl Default for RestorationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RestorationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        tags.sort_unstable();
        f.debug_struct("RestorationRegistry")
            .field("methods", &tags)
            .finish()
    }
}
