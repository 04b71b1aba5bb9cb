//! Client configuration and provider endpoint defaults.

use reqwest::Client;
use std::time::Duration;

/// Default token endpoint.
pub const DEFAULT_ACCESS_TOKEN_URI: &str = "https://oauth.aliyun.com/v1/token";
/// Default authorization (consent) endpoint.
pub const DEFAULT_AUTHORIZATION_URI: &str = "https://signin.aliyun.com/oauth2/v1/auth";
/// Default revocation endpoint.
pub const DEFAULT_REVOKE_TOKEN_URI: &str = "https://oauth.aliyun.com/v1/revoke";
/// Default userinfo endpoint.
pub const DEFAULT_USER_INFO_URI: &str = "https://oauth.aliyun.com/v1/userinfo";

/// Configuration for an [`OAuthClient`](crate::OAuthClient).
///
/// Immutable once the client is built. Endpoint URIs default to the
/// provider's production endpoints and only need overriding for testing or
/// non-standard deployments.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// OAuth client ID.
    pub client_id: String,
    /// OAuth client secret (required for token operations).
    pub client_secret: String,
    /// Token endpoint URL.
    pub access_token_uri: String,
    /// Authorization endpoint URL.
    pub authorization_uri: String,
    /// Revocation endpoint URL.
    pub revoke_token_uri: String,
    /// Userinfo endpoint URL.
    pub user_info_uri: String,
    /// Request timeout, passed through to the HTTP client.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a configuration for the given client ID, with all endpoints
    /// set to the provider defaults.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: String::new(),
            access_token_uri: DEFAULT_ACCESS_TOKEN_URI.to_string(),
            authorization_uri: DEFAULT_AUTHORIZATION_URI.to_string(),
            revoke_token_uri: DEFAULT_REVOKE_TOKEN_URI.to_string(),
            user_info_uri: DEFAULT_USER_INFO_URI.to_string(),
            timeout: None,
        }
    }

    /// Set the client secret.
    #[must_use]
    pub fn with_client_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = secret.into();
        self
    }

    /// Override the token endpoint.
    #[must_use]
    pub fn with_access_token_uri(mut self, uri: impl Into<String>) -> Self {
        self.access_token_uri = uri.into();
        self
    }

    /// Override the authorization endpoint.
    #[must_use]
    pub fn with_authorization_uri(mut self, uri: impl Into<String>) -> Self {
        self.authorization_uri = uri.into();
        self
    }

    /// Override the revocation endpoint.
    #[must_use]
    pub fn with_revoke_token_uri(mut self, uri: impl Into<String>) -> Self {
        self.revoke_token_uri = uri.into();
        self
    }

    /// Override the userinfo endpoint.
    #[must_use]
    pub fn with_user_info_uri(mut self, uri: impl Into<String>) -> Self {
        self.user_info_uri = uri.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load credentials from the `CLIENT_ID` / `CLIENT_SECRET` environment
    /// variables, with default endpoints.
    pub fn from_env() -> Self {
        Self::new(std::env::var("CLIENT_ID").unwrap_or_default())
            .with_client_secret(std::env::var("CLIENT_SECRET").unwrap_or_default())
    }

    /// Build an HTTP client with this config.
    pub(crate) fn build_client(&self) -> Client {
        let mut builder = Client::builder();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_default()
    }
}
