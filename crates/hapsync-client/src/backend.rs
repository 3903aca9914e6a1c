//! Request builders for backends.

use reqwest::Method;

use crate::client::DataplaneClient;
use crate::error::Result;
use crate::models::{Backend, Versioned};

impl DataplaneClient {
    /// List all backends.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is undecodable.
    pub async fn backends(&self) -> Result<Vec<Backend>> {
        let response: Versioned<Vec<Backend>> = self
            .send_json(self.request(Method::GET, "/configuration/backends"))
            .await?;
        Ok(response.data)
    }

    /// Get a single backend by name.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if no backend has that name.
    pub async fn backend(&self, name: &str) -> Result<Backend> {
        let response: Versioned<Backend> = self
            .send_json(self.request(Method::GET, &format!("/configuration/backends/{name}")))
            .await?;
        Ok(response.data)
    }

    /// Queue creation of a backend under an open transaction.
    ///
    /// # Errors
    ///
    /// Returns an API error if the transaction is unknown or expired, or
    /// `ClientError::Validation` if the payload is rejected.
    pub async fn create_backend(&self, transaction_id: &str, backend: &Backend) -> Result<Backend> {
        self.send_json(
            self.request(Method::POST, "/configuration/backends")
                .query(&[("transaction_id", transaction_id)])
                .json(backend),
        )
        .await
    }

    /// Queue replacement of a backend under an open transaction.
    ///
    /// # Errors
    ///
    /// Returns an API error if the transaction is unknown or expired, or
    /// `ClientError::Validation` if the payload is rejected.
    pub async fn update_backend(
        &self,
        transaction_id: &str,
        name: &str,
        backend: &Backend,
    ) -> Result<Backend> {
        self.send_json(
            self.request(Method::PUT, &format!("/configuration/backends/{name}"))
                .query(&[("transaction_id", transaction_id)])
                .json(backend),
        )
        .await
    }

    /// Queue deletion of a backend under an open transaction.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if no backend has that name.
    pub async fn delete_backend(&self, transaction_id: &str, name: &str) -> Result<()> {
        self.send_no_content(
            self.request(Method::DELETE, &format!("/configuration/backends/{name}"))
                .query(&[("transaction_id", transaction_id)]),
        )
        .await
    }
}
