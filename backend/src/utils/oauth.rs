//! Google OAuth 2.0 authorization-code flow.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::{config::Config, error::AppError};

pub const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";
const GOOGLE_SCOPES: &str = "openid email profile";

/// Subset of the Google userinfo document the sign-in flow relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GoogleProfile {
    pub email: Option<String>,
    pub name: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// Trades an authorization code for the signed-in user's profile.
    async fn exchange_code(&self, code: &str) -> Result<GoogleProfile, AppError>;
}

pub fn google_authorization_url(config: &Config) -> Result<Url, AppError> {
    Url::parse_with_params(
        GOOGLE_AUTH_URL,
        &[
            ("response_type", "code"),
            ("client_id", config.google_client_id.as_str()),
            ("redirect_uri", config.oauth_redirect_uri.as_str()),
            ("scope", GOOGLE_SCOPES),
        ],
    )
    .map_err(|e| AppError::InternalServerError(anyhow::anyhow!("Invalid OAuth URL: {}", e)))
}

pub struct GoogleOAuthClient {
    http: reqwest::Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl GoogleOAuthClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("quadra-backend/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            client_id: config.google_client_id.clone(),
            client_secret: config.google_client_secret.clone(),
            redirect_uri: config.oauth_redirect_uri.clone(),
        })
    }
}

#[async_trait]
impl OAuthProvider for GoogleOAuthClient {
    async fn exchange_code(&self, code: &str) -> Result<GoogleProfile, AppError> {
        let token_response: Value = self
            .http
            .post(GOOGLE_TOKEN_URL)
            .form(&[
                ("code", code),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(|e| {
                AppError::InternalServerError(anyhow::anyhow!("Google token request failed: {}", e))
            })?
            .json()
            .await
            .map_err(|e| {
                AppError::InternalServerError(anyhow::anyhow!(
                    "Failed to parse Google token response: {}",
                    e
                ))
            })?;

        let access_token = extract_access_token(&token_response)?;

        self.http
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                AppError::InternalServerError(anyhow::anyhow!("Google userinfo request failed: {}", e))
            })?
            .json::<GoogleProfile>()
            .await
            .map_err(|e| {
                AppError::InternalServerError(anyhow::anyhow!(
                    "Failed to parse Google userinfo: {}",
                    e
                ))
            })
    }
}

/// A token response without an `id_token` means the code was rejected.
fn extract_access_token(token_response: &Value) -> Result<&str, AppError> {
    if token_response.get("id_token").is_none() {
        tracing::warn!(error = ?token_response.get("error"), "Google rejected authorization code");
        return Err(AppError::BadRequest(
            "Invalid code or google error".to_string(),
        ));
    }
    token_response
        .get("access_token")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::BadRequest("Invalid code or google error".to_string()))
}
