//! Request builders for server templates.
//!
//! Server templates are nested under a backend and addressed by their prefix.
//! Unlike servers, the API addresses them with the `backend` query parameter
//! alone, and the list endpoint is itself backend-scoped.

use reqwest::Method;

use crate::client::DataplaneClient;
use crate::error::Result;
use crate::models::{ServerTemplate, Versioned};

impl DataplaneClient {
    /// List all server templates of a backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is undecodable.
    pub async fn server_templates(&self, parent_name: &str) -> Result<Vec<ServerTemplate>> {
        let response: Versioned<Vec<ServerTemplate>> = self
            .send_json(
                self.request(Method::GET, "/configuration/server_templates")
                    .query(&[("backend", parent_name)]),
            )
            .await?;
        Ok(response.data)
    }

    /// Get a single server template by prefix within its parent backend.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if the backend has no template with
    /// that prefix.
    pub async fn server_template(&self, prefix: &str, parent_name: &str) -> Result<ServerTemplate> {
        let response: Versioned<ServerTemplate> = self
            .send_json(
                self.request(
                    Method::GET,
                    &format!("/configuration/server_templates/{prefix}"),
                )
                .query(&[("backend", parent_name)]),
            )
            .await?;
        Ok(response.data)
    }

    /// Queue creation of a server template under an open transaction.
    ///
    /// # Errors
    ///
    /// Returns an API error if the transaction is unknown or expired, or
    /// `ClientError::Validation` if the payload is rejected.
    pub async fn create_server_template(
        &self,
        transaction_id: &str,
        template: &ServerTemplate,
        parent_name: &str,
    ) -> Result<ServerTemplate> {
        self.send_json(
            self.request(Method::POST, "/configuration/server_templates")
                .query(&[("backend", parent_name), ("transaction_id", transaction_id)])
                .json(template),
        )
        .await
    }

    /// Queue replacement of a server template under an open transaction.
    ///
    /// # Errors
    ///
    /// Returns an API error if the transaction is unknown or expired, or
    /// `ClientError::Validation` if the payload is rejected.
    pub async fn update_server_template(
        &self,
        transaction_id: &str,
        prefix: &str,
        template: &ServerTemplate,
        parent_name: &str,
    ) -> Result<ServerTemplate> {
        self.send_json(
            self.request(
                Method::PUT,
                &format!("/configuration/server_templates/{prefix}"),
            )
            .query(&[("backend", parent_name), ("transaction_id", transaction_id)])
            .json(template),
        )
        .await
    }

    /// Queue deletion of a server template under an open transaction.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if the backend has no template with
    /// that prefix.
    pub async fn delete_server_template(
        &self,
        transaction_id: &str,
        prefix: &str,
        parent_name: &str,
    ) -> Result<()> {
        self.send_no_content(
            self.request(
                Method::DELETE,
                &format!("/configuration/server_templates/{prefix}"),
            )
            .query(&[("backend", parent_name), ("transaction_id", transaction_id)]),
        )
        .await
    }
}
