//! Request builders for servers.
//!
//! Servers are nested under a backend: every addressed call carries
//! `parent_type=backend`, `parent_name` and the `backend` alias as query
//! parameters.

use reqwest::Method;

use crate::client::DataplaneClient;
use crate::error::Result;
use crate::models::{Server, Versioned};

/// Addressing parameters for a server's parent backend.
fn parent_params(parent_name: &str) -> [(&'static str, &str); 3] {
    [
        ("parent_type", "backend"),
        ("parent_name", parent_name),
        ("backend", parent_name),
    ]
}

impl DataplaneClient {
    /// List all servers across all backends.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is undecodable.
    pub async fn servers(&self) -> Result<Vec<Server>> {
        let response: Versioned<Vec<Server>> = self
            .send_json(self.request(Method::GET, "/configuration/servers"))
            .await?;
        Ok(response.data)
    }

    /// Get a single server by name within its parent backend.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if the backend has no such server.
    pub async fn server(&self, name: &str, parent_name: &str) -> Result<Server> {
        let response: Versioned<Server> = self
            .send_json(
                self.request(Method::GET, &format!("/configuration/servers/{name}"))
                    .query(&parent_params(parent_name)),
            )
            .await?;
        Ok(response.data)
    }

    /// Queue creation of a server under an open transaction.
    ///
    /// # Errors
    ///
    /// Returns an API error if the transaction is unknown or expired, or
    /// `ClientError::Validation` if the payload is rejected.
    pub async fn create_server(
        &self,
        transaction_id: &str,
        server: &Server,
        parent_name: &str,
    ) -> Result<Server> {
        self.send_json(
            self.request(Method::POST, "/configuration/servers")
                .query(&parent_params(parent_name))
                .query(&[("transaction_id", transaction_id)])
                .json(server),
        )
        .await
    }

    /// Queue replacement of a server under an open transaction.
    ///
    /// # Errors
    ///
    /// Returns an API error if the transaction is unknown or expired, or
    /// `ClientError::Validation` if the payload is rejected.
    pub async fn update_server(
        &self,
        transaction_id: &str,
        name: &str,
        server: &Server,
        parent_name: &str,
    ) -> Result<Server> {
        self.send_json(
            self.request(Method::PUT, &format!("/configuration/servers/{name}"))
                .query(&parent_params(parent_name))
                .query(&[("transaction_id", transaction_id)])
                .json(server),
        )
        .await
    }

    /// Queue deletion of a server under an open transaction.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if the backend has no such server.
    pub async fn delete_server(
        &self,
        transaction_id: &str,
        name: &str,
        parent_name: &str,
    ) -> Result<()> {
        self.send_no_content(
            self.request(Method::DELETE, &format!("/configuration/servers/{name}"))
                .query(&parent_params(parent_name))
                .query(&[("transaction_id", transaction_id)]),
        )
        .await
    }
}
