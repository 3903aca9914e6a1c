//! Request builder for resolvers sections.
//!
//! Resolvers are read-only at this layer; they are listed so server templates
//! can reference them by name.

use reqwest::Method;

use crate::client::DataplaneClient;
use crate::error::Result;
use crate::models::{Resolver, Versioned};

impl DataplaneClient {
    /// List all resolvers sections.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is undecodable.
    pub async fn resolvers(&self) -> Result<Vec<Resolver>> {
        let response: Versioned<Vec<Resolver>> = self
            .send_json(self.request(Method::GET, "/configuration/resolvers"))
            .await?;
        Ok(response.data)
    }
}
