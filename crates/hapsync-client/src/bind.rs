//! Request builders for binds.
//!
//! Binds are nested under a frontend: every addressed call carries
//! `parent_type=frontend`, `parent_name` and the `frontend` alias as query
//! parameters. The parent is pure addressing; it is never part of the stored
//! object body.

use reqwest::Method;

use crate::client::DataplaneClient;
use crate::error::Result;
use crate::models::{Bind, Versioned};

/// Addressing parameters for a bind's parent frontend.
fn parent_params(parent_name: &str) -> [(&'static str, &str); 3] {
    [
        ("parent_type", "frontend"),
        ("parent_name", parent_name),
        ("frontend", parent_name),
    ]
}

impl DataplaneClient {
    /// List all binds across all frontends.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is undecodable.
    pub async fn binds(&self) -> Result<Vec<Bind>> {
        let response: Versioned<Vec<Bind>> = self
            .send_json(self.request(Method::GET, "/configuration/binds"))
            .await?;
        Ok(response.data)
    }

    /// Get a single bind by name within its parent frontend.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if the frontend has no such bind.
    pub async fn bind(&self, name: &str, parent_name: &str) -> Result<Bind> {
        let response: Versioned<Bind> = self
            .send_json(
                self.request(Method::GET, &format!("/configuration/binds/{name}"))
                    .query(&parent_params(parent_name)),
            )
            .await?;
        Ok(response.data)
    }

    /// Queue creation of a bind under an open transaction.
    ///
    /// # Errors
    ///
    /// Returns an API error if the transaction is unknown or expired, or
    /// `ClientError::Validation` if the payload is rejected.
    pub async fn create_bind(
        &self,
        transaction_id: &str,
        bind: &Bind,
        parent_name: &str,
    ) -> Result<Bind> {
        self.send_json(
            self.request(Method::POST, "/configuration/binds")
                .query(&parent_params(parent_name))
                .query(&[("transaction_id", transaction_id)])
                .json(bind),
        )
        .await
    }

    /// Queue replacement of a bind under an open transaction.
    ///
    /// # Errors
    ///
    /// Returns an API error if the transaction is unknown or expired, or
    /// `ClientError::Validation` if the payload is rejected.
    pub async fn update_bind(
        &self,
        transaction_id: &str,
        name: &str,
        bind: &Bind,
        parent_name: &str,
    ) -> Result<Bind> {
        self.send_json(
            self.request(Method::PUT, &format!("/configuration/binds/{name}"))
                .query(&parent_params(parent_name))
                .query(&[("transaction_id", transaction_id)])
                .json(bind),
        )
        .await
    }

    /// Queue deletion of a bind under an open transaction.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if the frontend has no such bind.
    pub async fn delete_bind(
        &self,
        transaction_id: &str,
        name: &str,
        parent_name: &str,
    ) -> Result<()> {
        self.send_no_content(
            self.request(Method::DELETE, &format!("/configuration/binds/{name}"))
                .query(&parent_params(parent_name))
                .query(&[("transaction_id", transaction_id)]),
        )
        .await
    }
}
