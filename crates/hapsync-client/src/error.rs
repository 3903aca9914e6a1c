//! Error types for Data Plane API calls.

use serde::Deserialize;
use thiserror::Error;

/// A result type using `ClientError`.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the Data Plane API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection or IO failure before a response could be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON of the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The addressed object or transaction does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The payload or queued transaction contents were rejected.
    #[error("validation rejected: {0}")]
    Validation(String),

    /// The configuration version moved between read and commit.
    #[error("version conflict: {0}")]
    Conflict(String),

    /// Any other non-success API response.
    #[error("api error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message extracted from the response body.
        message: String,
    },

    /// Connection parameters are missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Returns true if this error is a version conflict, the only condition
    /// that is safe to retry from a fresh version read.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// Returns true if the addressed object was absent.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Error body returned by the Data Plane API.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[allow(dead_code)]
    pub(crate) code: Option<i64>,
    pub(crate) message: Option<String>,
}

/// Map a non-success response to the error taxonomy.
///
/// 404 addresses an absent object or transaction; 406 and 409 are the two
/// shapes of optimistic-concurrency failure (stale transaction open, outdated
/// commit); 400 and 422 are payload rejections.
pub(crate) async fn classify_response(response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    let message = response
        .json::<ApiErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| format!("HTTP {status}"));

    match status {
        404 => ClientError::NotFound(message),
        406 | 409 => ClientError::Conflict(message),
        400 | 422 => ClientError::Validation(message),
        _ => ClientError::Api { status, message },
    }
}
