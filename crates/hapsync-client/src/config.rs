//! Client connection configuration.
//!
//! Connection parameters come from the caller or, when absent, from the
//! `HAPROXY_HOST`, `HAPROXY_USERNAME`, `HAPROXY_PASSWORD` and
//! `HAPROXY_INSECURE` environment variables.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Configuration for the Data Plane API client.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the Data Plane API (e.g. "http://10.0.0.1:5555").
    pub host: String,

    /// Basic authentication user.
    pub username: String,

    /// Basic authentication password.
    pub password: String,

    /// Skip TLS certificate verification.
    #[serde(default)]
    pub insecure: bool,

    /// Request timeout in seconds.
    #[serde(default = "ClientConfig::default_timeout")]
    pub timeout_seconds: u64,
}

impl ClientConfig {
    const fn default_timeout() -> u64 {
        30
    }

    /// Create a configuration with default timeout and TLS verification on.
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            username: username.into(),
            password: password.into(),
            insecure: false,
            timeout_seconds: Self::default_timeout(),
        }
    }

    /// Build a configuration from the `HAPROXY_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if `HAPROXY_HOST`, `HAPROXY_USERNAME` or
    /// `HAPROXY_PASSWORD` is unset or empty.
    pub fn from_env() -> Result<Self> {
        let host = require_env("HAPROXY_HOST")?;
        let username = require_env("HAPROXY_USERNAME")?;
        let password = require_env("HAPROXY_PASSWORD")?;
        let insecure = std::env::var("HAPROXY_INSECURE")
            .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "True"))
            .unwrap_or(false);

        Ok(Self {
            insecure,
            ..Self::new(host, username, password)
        })
    }

    /// Get the request timeout as a `Duration`.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn require_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ClientError::Config(format!("{name} is not set"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_defaults() {
        let config = ClientConfig::new("http://localhost:5555", "admin", "secret");
        assert!(!config.insecure);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: ClientConfig = serde_json::from_str(
            "{\"host\": \"http://localhost:5555\", \"username\": \"admin\", \"password\": \"s\"}",
        )
        .unwrap();
        assert!(!config.insecure);
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn deserializes_explicit_values() {
        let config: ClientConfig = serde_json::from_str(
            "{\"host\": \"h\", \"username\": \"u\", \"password\": \"p\", \
             \"insecure\": true, \"timeout_seconds\": 5}",
        )
        .unwrap();
        assert!(config.insecure);
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }
}
