// src/oauth/mod.rs

use async_trait::async_trait;
use crate::error::AppResult;
use crate::session::SessionUser;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    fn provider_name(&self) -> &str;

    /// Where to send the browser to start a login.
    fn authorization_url(&self, state: &str, redirect_uri: &str) -> AppResult<String>;

    /// Trades an authorization code for an access token.
    async fn exchange_code(&self, code: &str, redirect_uri: &str) -> AppResult<String>;

    async fn fetch_user(&self, access_token: &str) -> AppResult<SessionUser>;
}

// Module declarations
pub mod google;
pub mod handlers;
pub mod mocks;

pub use google::GoogleProvider;
pub use mocks::MockIdentityProvider;
