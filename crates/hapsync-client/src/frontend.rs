//! Request builders for frontends.

use reqwest::Method;

use crate::client::DataplaneClient;
use crate::error::Result;
use crate::models::{Frontend, Versioned};

impl DataplaneClient {
    /// List all frontends.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is undecodable.
    pub async fn frontends(&self) -> Result<Vec<Frontend>> {
        let response: Versioned<Vec<Frontend>> = self
            .send_json(self.request(Method::GET, "/configuration/frontends"))
            .await?;
        Ok(response.data)
    }

    /// Get a single frontend by name.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if no frontend has that name.
    pub async fn frontend(&self, name: &str) -> Result<Frontend> {
        let response: Versioned<Frontend> = self
            .send_json(self.request(Method::GET, &format!("/configuration/frontends/{name}")))
            .await?;
        Ok(response.data)
    }

    /// Queue creation of a frontend under an open transaction.
    ///
    /// # Errors
    ///
    /// Returns an API error if the transaction is unknown or expired, or
    /// `ClientError::Validation` if the payload is rejected.
    pub async fn create_frontend(
        &self,
        transaction_id: &str,
        frontend: &Frontend,
    ) -> Result<Frontend> {
        self.send_json(
            self.request(Method::POST, "/configuration/frontends")
                .query(&[("transaction_id", transaction_id)])
                .json(frontend),
        )
        .await
    }

    /// Queue replacement of a frontend under an open transaction.
    ///
    /// # Errors
    ///
    /// Returns an API error if the transaction is unknown or expired, or
    /// `ClientError::Validation` if the payload is rejected.
    pub async fn update_frontend(
        &self,
        transaction_id: &str,
        name: &str,
        frontend: &Frontend,
    ) -> Result<Frontend> {
        self.send_json(
            self.request(Method::PUT, &format!("/configuration/frontends/{name}"))
                .query(&[("transaction_id", transaction_id)])
                .json(frontend),
        )
        .await
    }

    /// Queue deletion of a frontend under an open transaction.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if no frontend has that name.
    pub async fn delete_frontend(&self, transaction_id: &str, name: &str) -> Result<()> {
        self.send_no_content(
            self.request(Method::DELETE, &format!("/configuration/frontends/{name}"))
                .query(&[("transaction_id", transaction_id)]),
        )
        .await
    }
}
