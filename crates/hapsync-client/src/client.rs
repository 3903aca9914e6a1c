//! The authenticated send/decode primitive shared by all request builders.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{classify_response, ClientError, Result};

/// HTTP client for the HAProxy Data Plane API.
///
/// One instance is constructed at startup from a [`ClientConfig`] and shared
/// by every reconciler for the lifetime of the process. All endpoints live
/// under `{host}/services/haproxy` and use Basic authentication.
#[derive(Debug, Clone)]
pub struct DataplaneClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl DataplaneClient {
    /// Create a new client.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .danger_accept_invalid_certs(config.insecure)
            .build()
            .expect("failed to create HTTP client");

        Self::with_client(http, config)
    }

    /// Create a new client with a custom reqwest client.
    #[must_use]
    pub fn with_client(http: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            http,
            base_url: config.host.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }

    /// Get the base URL of the Data Plane API.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an authenticated request for a path under `/services/haproxy`.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/services/haproxy{path}", self.base_url);
        self.http
            .request(method, url)
            .basic_auth(&self.username, Some(&self.password))
    }

    /// Send a request and decode the JSON response body.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(classify_response(response).await);
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(%status, error = %e, "undecodable response body");
            ClientError::Decode(e.to_string())
        })
    }

    /// Send a request whose success response carries no body.
    pub(crate) async fn send_no_content(&self, req: RequestBuilder) -> Result<()> {
        let response = req.send().await?;

        if !response.status().is_success() {
            return Err(classify_response(response).await);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let config = ClientConfig::new("http://localhost:5555/", "admin", "secret");
        let client = DataplaneClient::new(&config);
        // Trailing slash is normalized away.
        assert_eq!(client.base_url(), "http://localhost:5555");
    }
}
