use async_trait::async_trait;
use std::collections::HashMap;

use super::IdentityProvider;
use crate::error::{AppError, AppResult};
use crate::session::SessionUser;

/// Offline stand-in for a real identity provider: codes map to users.
pub struct MockIdentityProvider {
    pub name: String,
    pub users: HashMap<String, SessionUser>,
}

impl MockIdentityProvider {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            users: HashMap::new(),
        }
    }

    pub fn with_user(mut self, code: &str, user: SessionUser) -> Self {
        self.users.insert(code.to_string(), user);
        self
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    fn provider_name(&self) -> &str {
        &self.name
    }

    fn authorization_url(&self, state: &str, redirect_uri: &str) -> AppResult<String> {
        Ok(format!(
            "https://idp.test/authorize?state={state}&redirect_uri={redirect_uri}"
        ))
    }

    async fn exchange_code(&self, code: &str, _redirect_uri: &str) -> AppResult<String> {
        if self.users.contains_key(code) {
            Ok(format!("token-{code}"))
        } else {
            Err(AppError::OAuth("invalid_grant".to_string()))
        }
    }

    async fn fetch_user(&self, access_token: &str) -> AppResult<SessionUser> {
        access_token
            .strip_prefix("token-")
            .and_then(|code| self.users.get(code))
            .cloned()
            .ok_or_else(|| AppError::OAuth("invalid access token".to_string()))
    }
}
