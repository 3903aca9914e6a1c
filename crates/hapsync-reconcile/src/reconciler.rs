//! Generic Create/Read/Update/Delete orchestration.

use std::marker::PhantomData;
use std::sync::Arc;

use hapsync_client::DataplaneClient;
use hapsync_core::ResourceId;

use crate::error::Result;
use crate::kind::{KindSpec, Scope};
use crate::retry::{run_versioned, RetryPolicy};

/// An object as observed on the proxy, addressed by its durable id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observed<T> {
    /// Durable `parent/leaf` identity.
    pub id: ResourceId,
    /// The object as returned by the API.
    pub object: T,
}

/// Reconciles one object kind against the versioned configuration document.
///
/// Every mutation runs the full sequence (read version, open transaction,
/// queue the call, commit) under the conflict-retry policy. The client is
/// shared; one instance per kind is constructed at startup and lives for the
/// process lifetime.
pub struct Reconciler<K: KindSpec> {
    client: Arc<DataplaneClient>,
    policy: RetryPolicy,
    _kind: PhantomData<K>,
}

impl<K: KindSpec> Reconciler<K> {
    /// Create a reconciler with an explicit retry policy.
    #[must_use]
    pub fn new(client: Arc<DataplaneClient>, policy: RetryPolicy) -> Self {
        Self {
            client,
            policy,
            _kind: PhantomData,
        }
    }

    /// Create a reconciler with the default retry policy.
    #[must_use]
    pub fn with_defaults(client: Arc<DataplaneClient>) -> Self {
        Self::new(client, RetryPolicy::default())
    }

    /// Whether a change of the leaf name must be modeled as
    /// destroy-and-recreate by the caller.
    #[must_use]
    pub const fn name_requires_replacement(&self) -> bool {
        K::NAME_REQUIRES_REPLACEMENT
    }

    /// Create the object and return its observed state.
    ///
    /// The id's parent comes from the caller's scope; the API response for
    /// nested kinds does not carry the parent, so it is never re-derived from
    /// the response.
    ///
    /// # Errors
    ///
    /// Returns an error when the mutation sequence fails with anything other
    /// than a recoverable conflict, or when the conflict budget is exhausted.
    pub async fn create(&self, scope: &Scope, desired: &K::Object) -> Result<Observed<K::Object>> {
        let created = run_versioned(&self.policy, || {
            let client = Arc::clone(&self.client);
            let scope = scope.clone();
            let desired = desired.clone();
            async move {
                let version = client.configuration_version().await?;
                let transaction = client.open_transaction(version).await?;
                let created = K::create(&client, &scope, &transaction.id, &desired).await?;
                client.commit_transaction(&transaction.id).await?;
                Ok(created)
            }
        })
        .await?;

        let id = ResourceId::new(scope.parent_component(), K::leaf(&created));
        tracing::debug!(kind = K::KIND, id = %id, "created object");
        Ok(Observed {
            id,
            object: created,
        })
    }

    /// Fetch the object addressed by `id` and return its observed state.
    ///
    /// The returned id is re-encoded from the leaf name the server reports,
    /// so a stale caller-side leaf cannot survive a read.
    ///
    /// # Errors
    ///
    /// Returns `ReconcileError::Id` for a malformed id, or
    /// `ClientError::NotFound` if the object is absent.
    pub async fn read(&self, id: &str) -> Result<Observed<K::Object>> {
        let parsed = ResourceId::parse(id)?;
        let scope = Scope::from_id_parent(parsed.parent());

        let object = K::fetch(&self.client, &scope, parsed.leaf()).await?;

        let id = ResourceId::new(parsed.parent(), K::leaf(&object));
        Ok(Observed { id, object })
    }

    /// Replace the object addressed by `id` and return its observed state.
    ///
    /// Update responses do not echo every field, so the observed state comes
    /// from a fresh fetch after the commit.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed id, a failed mutation sequence, or a
    /// failed re-read.
    pub async fn update(&self, id: &str, desired: &K::Object) -> Result<Observed<K::Object>> {
        let parsed = ResourceId::parse(id)?;
        let scope = Scope::from_id_parent(parsed.parent());
        let leaf = parsed.leaf().to_string();

        run_versioned(&self.policy, || {
            let client = Arc::clone(&self.client);
            let scope = scope.clone();
            let leaf = leaf.clone();
            let desired = desired.clone();
            async move {
                let version = client.configuration_version().await?;
                let transaction = client.open_transaction(version).await?;
                K::update(&client, &scope, &transaction.id, &leaf, &desired).await?;
                client.commit_transaction(&transaction.id).await?;
                Ok(())
            }
        })
        .await?;

        let object = K::fetch(&self.client, &scope, &leaf).await?;

        let id = ResourceId::new(parsed.parent(), K::leaf(&object));
        tracing::debug!(kind = K::KIND, id = %id, "updated object");
        Ok(Observed { id, object })
    }

    /// Delete the object addressed by `id`.
    ///
    /// # Errors
    ///
    /// `ClientError::NotFound` propagates as-is; callers decide whether an
    /// absent object counts as already-deleted.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let parsed = ResourceId::parse(id)?;
        let scope = Scope::from_id_parent(parsed.parent());
        let leaf = parsed.leaf().to_string();

        run_versioned(&self.policy, || {
            let client = Arc::clone(&self.client);
            let scope = scope.clone();
            let leaf = leaf.clone();
            async move {
                let version = client.configuration_version().await?;
                let transaction = client.open_transaction(version).await?;
                K::delete(&client, &scope, &transaction.id, &leaf).await?;
                client.commit_transaction(&transaction.id).await?;
                Ok(())
            }
        })
        .await?;

        tracing::debug!(kind = K::KIND, id, "deleted object");
        Ok(())
    }
}
