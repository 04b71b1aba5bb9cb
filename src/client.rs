//! The OAuth client and its five operations.

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{OAuthError, ServerError};
use crate::types::{AccessType, TokenResponse, UserInfo};

/// Stateless client for the provider's OAuth endpoints.
///
/// Holds only the static configuration and one HTTP client; every operation
/// is a single independent request/response cycle. Calls may run
/// concurrently without interference.
#[derive(Debug)]
pub struct OAuthClient {
    config: ClientConfig,
    http: Client,
}

impl OAuthClient {
    /// Create a client from configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: config.build_client(),
            config,
        }
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the authorization URL the user is redirected to for consent.
    ///
    /// No network call. `scope` is the provider's space-separated scope
    /// string; `state` is echoed back on the callback for CSRF protection.
    pub fn authorize_url(
        &self,
        redirect_uri: &str,
        state: &str,
        scope: &str,
        access_type: AccessType,
    ) -> Result<String, OAuthError> {
        if self.config.client_id.is_empty() {
            return Err(OAuthError::MissingClientId);
        }

        let query = query_string(&[
            ("client_id", &self.config.client_id),
            ("redirect_uri", redirect_uri),
            ("response_type", "code"),
            ("scope", scope),
            ("access_type", access_type.as_str()),
            ("state", state),
        ]);

        Ok(format!("{}?{}", self.config.authorization_uri, query))
    }

    /// Exchange an authorization code for tokens.
    ///
    /// `redirect_uri` must match the one used in the authorization URL;
    /// pass `""` when the provider does not require it on exchange.
    pub async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<TokenResponse, OAuthError> {
        let query = query_string(&[
            ("code", code),
            ("client_id", &self.config.client_id),
            ("client_secret", &self.config.client_secret),
            // camelCase on the wire, a quirk of this provider's token API
            ("redirectUri", redirect_uri),
            ("grant_type", "authorization_code"),
        ]);

        let url = format!("{}?{}", self.config.access_token_uri, query);
        let data = self.request(&url).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Obtain a fresh access token from a refresh token.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<TokenResponse, OAuthError> {
        let query = query_string(&[
            ("refresh_token", refresh_token),
            ("client_id", &self.config.client_id),
            ("client_secret", &self.config.client_secret),
            ("grant_type", "refresh_token"),
        ]);

        let url = format!("{}?{}", self.config.access_token_uri, query);
        let data = self.request(&url).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Revoke an access token.
    ///
    /// The success shape is provider-defined (typically
    /// `{"success": true, "message": "success"}`), so the raw decoded JSON
    /// is returned as-is.
    pub async fn revoke_token(&self, access_token: &str) -> Result<Value, OAuthError> {
        let query = query_string(&[
            ("token", access_token),
            ("client_id", &self.config.client_id),
            ("client_secret", &self.config.client_secret),
        ]);

        let url = format!("{}?{}", self.config.revoke_token_uri, query);
        self.request(&url).await
    }

    /// Fetch the claim set for an access token from the userinfo endpoint.
    pub async fn user_info(&self, access_token: &str) -> Result<UserInfo, OAuthError> {
        let query = query_string(&[("access_token", access_token)]);

        let url = format!("{}?{}", self.config.user_info_uri, query);
        let data = self.request(&url).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Shared request routine: GET the URL, require a JSON content-type,
    /// decode the body, and surface an `error` payload as
    /// [`OAuthError::Server`].
    async fn request(&self, url: &str) -> Result<Value, OAuthError> {
        // The query string carries credentials; log the endpoint only.
        let endpoint = url.split('?').next().unwrap_or(url);
        debug!(endpoint, "requesting oauth endpoint");

        let response = self.http.get(url).send().await?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !content_type.starts_with("application/json") {
            return Err(OAuthError::ContentType(content_type));
        }

        let body = response.text().await?;
        let data: Value = serde_json::from_str(&body)?;

        if let Some(code) = data.get("error").and_then(Value::as_str) {
            return Err(ServerError::from_payload(code, &data).into());
        }

        Ok(data)
    }
}

/// Encode `(key, value)` pairs as a URL query string, preserving order.
/// Values are percent-encoded with spaces as `%20`.
fn query_string(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn client_with_id(client_id: &str) -> OAuthClient {
        OAuthClient::new(ClientConfig::new(client_id))
    }

    #[test]
    fn test_authorize_url_exact() {
        let client = client_with_id("123456");

        let url = client
            .authorize_url(
                "https://yourwebapp.com/authcallback/",
                "1234567890",
                "openid /acs/ccc",
                AccessType::Offline,
            )
            .unwrap();

        assert_eq!(
            url,
            "https://signin.aliyun.com/oauth2/v1/auth?client_id=123456&redirect_uri=https%3A%2F%2Fyourwebapp.com%2Fauthcallback%2F&response_type=code&scope=openid%20%2Facs%2Fccc&access_type=offline&state=1234567890"
        );
    }

    #[test]
    fn test_authorize_url_missing_client_id() {
        let client = client_with_id("");

        let err = client
            .authorize_url("https://yourwebapp.com/", "state", "openid", AccessType::Online)
            .unwrap_err();

        assert!(matches!(err, OAuthError::MissingClientId));
    }

    #[test]
    fn test_authorize_url_spaces_are_percent20() {
        let client = client_with_id("123456");

        let url = client
            .authorize_url("https://yourwebapp.com/", "state", "openid profile", AccessType::Online)
            .unwrap();

        assert!(url.contains("scope=openid%20profile"));
        assert!(!url.contains('+'));
    }

    #[rstest]
    #[case("https://yourwebapp.com/authcallback/", "1234567890", "openid /acs/ccc", AccessType::Offline)]
    #[case("http://localhost:8080/cb?next=/home", "st&ate=1", "openid profile email", AccessType::Online)]
    #[case("https://example.com/回调", "状态", "a b+c", AccessType::Offline)]
    fn test_authorize_url_round_trip(
        #[case] redirect_uri: &str,
        #[case] state: &str,
        #[case] scope: &str,
        #[case] access_type: AccessType,
    ) {
        let client = client_with_id("123456");
        let url = client
            .authorize_url(redirect_uri, state, scope, access_type)
            .unwrap();

        let query = url.split_once('?').unwrap().1;
        let decoded: Vec<(String, String)> = query
            .split('&')
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap();
                (
                    key.to_string(),
                    urlencoding::decode(value).unwrap().into_owned(),
                )
            })
            .collect();

        assert_eq!(
            decoded,
            vec![
                ("client_id".to_string(), "123456".to_string()),
                ("redirect_uri".to_string(), redirect_uri.to_string()),
                ("response_type".to_string(), "code".to_string()),
                ("scope".to_string(), scope.to_string()),
                ("access_type".to_string(), access_type.as_str().to_string()),
                ("state".to_string(), state.to_string()),
            ]
        );
    }

    #[test]
    fn test_query_string_order_preserved() {
        let query = query_string(&[("b", "2"), ("a", "1"), ("c", "3")]);
        assert_eq!(query, "b=2&a=1&c=3");
    }
}
