//! Error types for the OAuth client.

use serde_json::Value;
use thiserror::Error;

/// Error reported by the authorization server in a JSON payload.
///
/// Built only from a response body carrying an `error` field; the display
/// string is `"{error}: {error_description}"` as documented by the provider.
#[derive(Debug, Clone, Error)]
#[error("{code}: {description}")]
pub struct ServerError {
    /// Provider error code (e.g. `invalid_grant`).
    pub code: String,
    /// Human-readable description supplied by the provider.
    pub description: String,
    /// HTTP status the provider embedded in the payload, if any.
    pub http_code: Option<u64>,
    /// Request ID for support diagnostics, if any.
    pub request_id: Option<String>,
}

impl ServerError {
    /// Build from a decoded error payload.
    pub(crate) fn from_payload(code: &str, payload: &Value) -> Self {
        Self {
            code: code.to_string(),
            description: payload
                .get("error_description")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            http_code: payload.get("http_code").and_then(Value::as_u64),
            request_id: payload
                .get("request_id")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

/// Errors that can occur in OAuth client operations.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// Configuration is missing the client ID.
    #[error("missing client_id in configuration")]
    MissingClientId,

    /// Response content-type was not JSON; the body is never parsed.
    #[error("content type invalid: {0}, should be 'application/json'")]
    ContentType(String),

    /// The authorization server returned an error payload.
    #[error(transparent)]
    Server(#[from] ServerError),

    /// Transport-level failure, passed through unwrapped.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Response claimed to be JSON but did not parse, or a success payload
    /// did not match the expected shape.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
