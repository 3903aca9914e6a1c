//! Configuration document version reader.

use reqwest::Method;
use serde::Deserialize;

use crate::client::DataplaneClient;
use crate::error::Result;

/// The versioned configuration document envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Configuration {
    /// Current document version. `0` means the document has never been
    /// versioned.
    #[serde(rename = "_version", default)]
    pub version: i64,
}

impl DataplaneClient {
    /// Fetch the current configuration document version.
    ///
    /// A freshly-initialized proxy reports the sentinel version `0`; the
    /// first transaction must target version `1`, so the sentinel is
    /// normalized here.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is undecodable.
    pub async fn configuration_version(&self) -> Result<i64> {
        let configuration: Configuration = self
            .send_json(self.request(Method::GET, "/configuration/raw"))
            .await?;

        if configuration.version == 0 {
            tracing::debug!("configuration has never been versioned, targeting version 1");
            return Ok(1);
        }

        Ok(configuration.version)
    }
}
