//! Wire types returned by the provider.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Token response from the token endpoint.
///
/// All values are returned verbatim from the provider; no local validation
/// of token contents is performed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime of the access token in seconds.
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
}

/// Claim set returned by the userinfo endpoint.
///
/// The shape is defined entirely by the provider's identity token; this is
/// an open mapping with no schema enforcement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(flatten)]
    pub claims: serde_json::Map<String, Value>,
}

impl UserInfo {
    /// Look up a claim by name.
    pub fn get(&self, claim: &str) -> Option<&Value> {
        self.claims.get(claim)
    }
}

/// `access_type` parameter of the authorization URL.
///
/// `Offline` asks the provider to issue a refresh token alongside the
/// access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessType {
    #[default]
    Online,
    Offline,
}

impl AccessType {
    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            AccessType::Online => "online",
            AccessType::Offline => "offline",
        }
    }
}
