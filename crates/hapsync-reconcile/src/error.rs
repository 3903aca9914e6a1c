//! Error types for reconciliation.

use hapsync_client::ClientError;
use hapsync_core::IdError;
use thiserror::Error;

/// A result type using `ReconcileError`.
pub type Result<T> = std::result::Result<T, ReconcileError>;

/// Errors that can occur while reconciling an object.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The resource id could not be parsed.
    #[error("invalid resource id: {0}")]
    Id(#[from] IdError),

    /// A Data Plane API call failed and is not recoverable by retrying.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Every attempt of a mutation sequence ended in a version conflict.
    #[error("conflict retries exhausted after {attempts} attempts: {source}")]
    RetriesExhausted {
        /// Number of attempts made.
        attempts: u32,
        /// The conflict from the final attempt.
        #[source]
        source: ClientError,
    },
}

impl ReconcileError {
    /// Returns true if the failure was an absent object.
    ///
    /// Callers deleting an object treat this as already-deleted rather than
    /// fatal; the reconciler itself does not soften it.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Client(ClientError::NotFound(_)))
    }
}
