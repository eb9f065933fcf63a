use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use super::IdentityProvider;
use crate::config::GoogleCredentials;
use crate::error::{AppError, AppResult};
use crate::session::SessionUser;

pub const AUTHORIZATION_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
pub const USERINFO_ENDPOINT: &str = "https://openidconnect.googleapis.com/v1/userinfo";
pub const SCOPES: &str = "openid email profile";

pub struct GoogleProvider {
    client_id: String,
    client_secret: String,
    http: reqwest::Client,
}

impl GoogleProvider {
    pub fn new(credentials: GoogleCredentials) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client_id: credentials.client_id,
            client_secret: credentials.client_secret,
            http,
        })
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    sub: String,
    email: Option<String>,
    name: Option<String>,
    picture: Option<String>,
}

impl From<UserInfoResponse> for SessionUser {
    fn from(info: UserInfoResponse) -> Self {
        SessionUser {
            sub: info.sub,
            email: info.email,
            name: info.name,
            picture: info.picture,
        }
    }
}

async fn error_body(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    format!("status {status}: {body}")
}

#[async_trait]
impl IdentityProvider for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    fn authorization_url(&self, state: &str, redirect_uri: &str) -> AppResult<String> {
        let url = Url::parse_with_params(
            AUTHORIZATION_ENDPOINT,
            &[
                ("response_type", "code"),
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", redirect_uri),
                ("scope", SCOPES),
                ("state", state),
            ],
        )
        .map_err(|e| AppError::Internal(format!("invalid authorization endpoint: {e}")))?;

        Ok(url.into())
    }

    async fn exchange_code(&self, code: &str, redirect_uri: &str) -> AppResult<String> {
        let response = self
            .http
            .post(TOKEN_ENDPOINT)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", redirect_uri),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let detail = error_body(response).await;
            tracing::warn!(%detail, "google token exchange failed");
            return Err(AppError::OAuth(format!("token exchange failed, {detail}")));
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }

    async fn fetch_user(&self, access_token: &str) -> AppResult<SessionUser> {
        let response = self
            .http
            .get(USERINFO_ENDPOINT)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            let detail = error_body(response).await;
            tracing::warn!(%detail, "google userinfo request failed");
            return Err(AppError::OAuth(format!("userinfo request failed, {detail}")));
        }

        let info: UserInfoResponse = response.json().await?;
        Ok(info.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> GoogleProvider {
        GoogleProvider::new(GoogleCredentials {
            client_id: "client-123.apps.googleusercontent.com".to_string(),
            client_secret: "shh".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_authorization_url_params() {
        let url = provider()
            .authorization_url("state-abc", "http://localhost:3000/auth/callback")
            .unwrap();
        let parsed = Url::parse(&url).unwrap();

        assert_eq!(parsed.host_str(), Some("accounts.google.com"));
        let params: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
        assert!(params.contains(&("response_type".into(), "code".into())));
        assert!(params.contains(&("state".into(), "state-abc".into())));
        assert!(params.contains(&("scope".into(), "openid email profile".into())));
        assert!(params.contains(&(
            "redirect_uri".into(),
            "http://localhost:3000/auth/callback".into()
        )));
        assert!(!url.contains("shh"));
    }

    #[test]
    fn test_userinfo_mapping() {
        let info: UserInfoResponse = serde_json::from_str(
            r#"{"sub":"42","email":"ada@example.com","email_verified":true,"name":"Ada"}"#,
        )
        .unwrap();
        let user: SessionUser = info.into();

        assert_eq!(user.sub, "42");
        assert_eq!(user.email.as_deref(), Some("ada@example.com"));
        assert_eq!(user.picture, None);
    }
}
