//! Generic component identifier.
//!
//! Every pipeline component carries a key that orchestrators use to attach
//! per-component configuration and to report dispatch failures. Keys are
//! either given explicitly or derived from the component type's qualified
//! name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a pipeline component.
///
/// A transparent wrapper around a String with consistent identification
/// semantics across the codebase.
#[derive(Debug, Clone, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentKey(String);

impl ComponentKey {
    /// Create a new component key from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying identifier string.
    pub fn id(&self) -> &str {
        &self.0
    }

    /// Whether this key is empty. Empty keys are rejected wherever
    /// configuration is attached to a component.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Derive a key from a qualified type name.
    ///
    /// Takes the last non-empty segment of a dotted or `::`-separated path,
    /// mirroring how a component's id defaults to its type name. Returns
    /// "component" if no valid segment can be extracted.
    ///
    /// # Examples
    ///
    /// ```
    /// use tundra_common::ComponentKey;
    ///
    /// assert_eq!(ComponentKey::from_qualified_name("demo.components.PassThrough").id(), "PassThrough");
    /// assert_eq!(ComponentKey::from_qualified_name("demo::PassThrough").id(), "PassThrough");
    /// assert_eq!(ComponentKey::from_qualified_name("").id(), "component");
    /// ```
    pub fn from_qualified_name(name: &str) -> Self {
        let key = name
            .rsplit(['.', ':'])
            .find(|s| !s.is_empty())
            .unwrap_or("component");

        Self(key.to_string())
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ComponentKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ComponentKey {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
