//! Per-kind descriptor trait.
//!
//! The five object kinds share the same CRUD orchestration and differ only in
//! endpoint, addressing and payload shape. Those differences are captured
//! here so the reconciler can stay generic.

use async_trait::async_trait;
use hapsync_client::DataplaneClient;
use hapsync_core::ROOT_PARENT;

/// Addressing scope of an object: root-scoped or nested under a parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Top-level kinds (backend, frontend).
    Root,
    /// Nested kinds, owned by the named parent object.
    Nested(String),
}

impl Scope {
    /// Create a nested scope for the given parent name.
    #[must_use]
    pub fn nested(parent_name: impl Into<String>) -> Self {
        Self::Nested(parent_name.into())
    }

    /// Recover the scope from a parsed id's parent component.
    #[must_use]
    pub fn from_id_parent(parent: &str) -> Self {
        if parent == ROOT_PARENT {
            Self::Root
        } else {
            Self::Nested(parent.to_string())
        }
    }

    /// The parent component used when encoding a [`ResourceId`].
    ///
    /// [`ResourceId`]: hapsync_core::ResourceId
    #[must_use]
    pub fn parent_component(&self) -> &str {
        match self {
            Self::Root => ROOT_PARENT,
            Self::Nested(name) => name,
        }
    }
}

/// Descriptor binding one object kind to its Data Plane API calls.
///
/// Root-scoped kinds ignore the scope argument; nested kinds pass its parent
/// name through as an addressing parameter.
#[async_trait]
pub trait KindSpec: Send + Sync + 'static {
    /// Wire representation exchanged with the API.
    type Object: Clone + Send + Sync + 'static;

    /// Kind name used in logs.
    const KIND: &'static str;

    /// Whether a change of the leaf name must be modeled as
    /// destroy-and-recreate by the caller. Declared per kind, not enforced in
    /// the CRUD path.
    const NAME_REQUIRES_REPLACEMENT: bool;

    /// The object's own leaf name (prefix, for server templates).
    fn leaf(object: &Self::Object) -> &str;

    /// Get-one call.
    async fn fetch(
        client: &DataplaneClient,
        scope: &Scope,
        leaf: &str,
    ) -> hapsync_client::Result<Self::Object>;

    /// Create call, queued under an open transaction.
    async fn create(
        client: &DataplaneClient,
        scope: &Scope,
        transaction_id: &str,
        object: &Self::Object,
    ) -> hapsync_client::Result<Self::Object>;

    /// Update call, queued under an open transaction.
    async fn update(
        client: &DataplaneClient,
        scope: &Scope,
        transaction_id: &str,
        leaf: &str,
        object: &Self::Object,
    ) -> hapsync_client::Result<Self::Object>;

    /// Delete call, queued under an open transaction.
    async fn delete(
        client: &DataplaneClient,
        scope: &Scope,
        transaction_id: &str,
        leaf: &str,
    ) -> hapsync_client::Result<()>;
}
