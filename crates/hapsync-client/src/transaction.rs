//! Transaction open and commit endpoints.
//!
//! A transaction is a single-use mutation batch anchored to a document
//! version. Its lifecycle is `Opened -> Committed` or `Opened -> Failed`;
//! there is no abort call, an uncommitted transaction is simply abandoned on
//! the proxy side.

use reqwest::Method;
use serde::Deserialize;

use crate::client::DataplaneClient;
use crate::error::Result;

/// An open (or just-committed) configuration transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    /// Transaction identifier, passed to every mutation call.
    pub id: String,
    /// Document version the transaction is anchored to.
    #[serde(rename = "_version", default)]
    pub version: i64,
    /// Lifecycle status as reported by the API ("in_progress", "success").
    #[serde(default)]
    pub status: Option<String>,
}

impl DataplaneClient {
    /// Open a transaction anchored to `version`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Conflict` if `version` no longer matches the
    /// current document version, i.e. another party committed since it was
    /// read.
    pub async fn open_transaction(&self, version: i64) -> Result<Transaction> {
        let transaction: Transaction = self
            .send_json(
                self.request(Method::POST, "/transactions")
                    .query(&[("version", version)]),
            )
            .await?;

        tracing::debug!(id = %transaction.id, version, "opened transaction");
        Ok(transaction)
    }

    /// Commit all changes queued under the transaction.
    ///
    /// On success the document version advances by exactly one.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Conflict` if the document moved since the
    /// transaction was opened, or `ClientError::Validation` if the queued
    /// changes are not self-consistent (e.g. a nested object referencing a
    /// nonexistent parent).
    pub async fn commit_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        let transaction: Transaction = self
            .send_json(self.request(Method::PUT, &format!("/transactions/{transaction_id}")))
            .await?;

        tracing::debug!(id = %transaction.id, "committed transaction");
        Ok(transaction)
    }
}
