//! OAuth 2.0 client for Aliyun (Alibaba Cloud) sign-in.
//!
//! This crate is a thin binding over the provider's OAuth endpoints:
//!
//! - [`OAuthClient::authorize_url`]: Build the URL the user is sent to for consent
//! - [`OAuthClient::exchange_code`]: Exchange an authorization code for tokens
//! - [`OAuthClient::refresh_token`]: Refresh an expired access token
//! - [`OAuthClient::revoke_token`]: Revoke an access token
//! - [`OAuthClient::user_info`]: Fetch the claim set for an access token
//!
//! Each operation composes a query string, performs one HTTP GET, and decodes
//! the JSON response. Provider-reported errors surface as
//! [`OAuthError::Server`].
//!
//! Note: This crate does NOT store tokens or schedule refreshes - that's the
//! application's responsibility.
//!
//! ## Example
//!
//! ```rust,ignore
//! use aliyun_oauth2::{AccessType, ClientConfig, OAuthClient};
//!
//! let config = ClientConfig::new("123456").with_client_secret("secret");
//! let client = OAuthClient::new(config);
//!
//! let url = client.authorize_url(
//!     "https://yourwebapp.com/authcallback/",
//!     "1234567890",
//!     "openid /acs/ccc",
//!     AccessType::Offline,
//! )?;
//!
//! // ...user consents, the callback receives `code`...
//!
//! let tokens = client.exchange_code(&code, "").await?;
//! ```

mod client;
mod config;
mod error;
mod types;

pub use client::OAuthClient;
pub use config::ClientConfig;
pub use error::{OAuthError, ServerError};
pub use types::{AccessType, TokenResponse, UserInfo};
