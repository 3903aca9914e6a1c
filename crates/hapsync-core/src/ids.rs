//! Composite resource identifiers.
//!
//! Every managed object is addressed by a `parent/leaf` pair. Top-level kinds
//! (backends, frontends) use the literal parent `"root"`; nested kinds
//! (binds, servers, server templates) use the name of the object they belong
//! to. The joined string is the only durable handle external callers keep, so
//! parsing is strict: exactly two non-empty parts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parent component used for objects that have no parent of their own.
pub const ROOT_PARENT: &str = "root";

/// A composite `parent/leaf` identity for a managed object.
///
/// The parent component must not contain `/`; the leaf may, since parsing
/// splits on the first separator only.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceId {
    parent: String,
    leaf: String,
}

impl ResourceId {
    /// Create an identity from a parent name and a leaf name.
    #[must_use]
    pub fn new(parent: impl Into<String>, leaf: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            leaf: leaf.into(),
        }
    }

    /// Create an identity for a root-scoped object.
    #[must_use]
    pub fn root(leaf: impl Into<String>) -> Self {
        Self::new(ROOT_PARENT, leaf)
    }

    /// Parse an identity from its `parent/leaf` string form.
    ///
    /// Legacy identities may arrive wrapped in one layer of string quoting;
    /// that layer is stripped before splitting. A quoting layer that does not
    /// unquote cleanly is not an error: the original string is used as-is.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::Format`] if the string does not split into exactly
    /// two non-empty parts.
    pub fn parse(id: &str) -> Result<Self, IdError> {
        let unquoted = match unquote(id) {
            Some(inner) => inner,
            None => {
                tracing::debug!(id, "id is not quoted, skipping unquoting");
                id.to_string()
            }
        };

        let (parent, leaf) = unquoted
            .split_once('/')
            .ok_or_else(|| IdError::Format(id.to_string()))?;

        if parent.is_empty() || leaf.is_empty() {
            return Err(IdError::Format(id.to_string()));
        }

        Ok(Self::new(parent, leaf))
    }

    /// The parent component (`"root"` for top-level kinds).
    #[must_use]
    pub fn parent(&self) -> &str {
        &self.parent
    }

    /// The object's own name (or prefix, for server templates).
    #[must_use]
    pub fn leaf(&self) -> &str {
        &self.leaf
    }

    /// Whether this identity is root-scoped.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent == ROOT_PARENT
    }
}

/// Strip one layer of double-quote string quoting, if present.
///
/// Returns `None` when the input is not a well-formed quoted string.
fn unquote(s: &str) -> Option<String> {
    if s.len() < 2 || !s.starts_with('"') || !s.ends_with('"') {
        return None;
    }
    serde_json::from_str::<String>(s).ok()
}

impl fmt::Debug for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceId({}/{})", self.parent, self.leaf)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.parent, self.leaf)
    }
}

impl FromStr for ResourceId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ResourceId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ResourceId> for String {
    fn from(id: ResourceId) -> Self {
        id.to_string()
    }
}

/// Errors that can occur when parsing resource identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The id does not split into two non-empty `parent/leaf` parts.
    #[error("unexpected format of id ({0}), expected parent/leaf")]
    Format(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_parse_roundtrip() {
        let id = ResourceId::new("front-http", "bd1");
        let parsed = ResourceId::parse(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
        assert_eq!(parsed.parent(), "front-http");
        assert_eq!(parsed.leaf(), "bd1");
    }

    #[test]
    fn root_scoped() {
        let id = ResourceId::root("b1");
        assert_eq!(id.to_string(), "root/b1");
        assert!(id.is_root());
        assert!(!ResourceId::new("f1", "bd1").is_root());
    }

    #[test]
    fn parse_strips_legacy_quoting() {
        let parsed = ResourceId::parse("\"root/b1\"").unwrap();
        assert_eq!(parsed, ResourceId::root("b1"));
    }

    #[test]
    fn parse_keeps_unparseable_quoting() {
        // Lone leading quote is not a quoted string; the raw value is used,
        // so the quote survives in the parent component.
        let parsed = ResourceId::parse("\"root/b1").unwrap();
        assert_eq!(parsed.parent(), "\"root");
        assert_eq!(parsed.leaf(), "b1");
    }

    #[test]
    fn parse_splits_on_first_separator_only() {
        let parsed = ResourceId::parse("f1/bd/with/slashes").unwrap();
        assert_eq!(parsed.parent(), "f1");
        assert_eq!(parsed.leaf(), "bd/with/slashes");
    }

    #[test]
    fn parse_rejects_missing_separator() {
        assert!(matches!(
            ResourceId::parse("just-a-name"),
            Err(IdError::Format(_))
        ));
    }

    #[test]
    fn parse_rejects_empty_parts() {
        assert!(matches!(ResourceId::parse("/leaf"), Err(IdError::Format(_))));
        assert!(matches!(
            ResourceId::parse("parent/"),
            Err(IdError::Format(_))
        ));
        assert!(matches!(ResourceId::parse("/"), Err(IdError::Format(_))));
        assert!(matches!(ResourceId::parse(""), Err(IdError::Format(_))));
    }

    #[test]
    fn serde_json_roundtrip() {
        let id = ResourceId::new("b1", "srv1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"b1/srv1\"");
        let parsed: ResourceId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn serde_rejects_malformed() {
        let result: Result<ResourceId, _> = serde_json::from_str("\"no-separator\"");
        assert!(result.is_err());
    }
}
