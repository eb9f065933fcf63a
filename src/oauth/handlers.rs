use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::server::AppState;
use super::IdentityProvider;
use crate::session::{session_id, set_session_cookie, SessionUser};

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Starts the login round trip: remember a fresh state, redirect to the provider.
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    let provider = state.identity.as_ref().ok_or(AppError::OAuthNotConfigured)?;

    let sid = state.sessions.ensure(session_id(&headers).as_deref()).await;
    let oauth_state = Uuid::new_v4().to_string();
    state
        .sessions
        .update(&sid, |data| data.oauth_state = Some(oauth_state.clone()))
        .await;

    let location = provider.authorization_url(&oauth_state, &state.redirect_uri)?;
    let sessions = state.sessions.size().await;
    tracing::debug!(
        provider = provider.provider_name(),
        sessions = sessions,
        "redirecting to identity provider"
    );

    let mut response_headers = HeaderMap::new();
    set_session_cookie(&mut response_headers, &sid);
    Ok((response_headers, Redirect::to(&location)))
}

pub async fn callback_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<CallbackQuery>,
) -> AppResult<impl IntoResponse> {
    let provider = state.identity.as_ref().ok_or(AppError::OAuthNotConfigured)?;

    if let Some(error) = &query.error {
        return Err(AppError::OAuth(format!("provider returned error: {error}")));
    }

    let sid = session_id(&headers)
        .ok_or_else(|| AppError::Validation("missing session cookie".to_string()))?;

    match complete_login(&state, provider.as_ref(), &sid, query).await {
        Ok(user) => {
            tracing::info!(provider = provider.provider_name(), sub = %user.sub, "oauth login succeeded");
            state
                .sessions
                .update(&sid, |data| data.user = Some(user))
                .await;
            Ok(Redirect::to("/"))
        }
        Err(e) => {
            state.sessions.discard_if_anonymous(&sid).await;
            Err(e)
        }
    }
}

async fn complete_login(
    state: &AppState,
    provider: &dyn IdentityProvider,
    sid: &str,
    query: CallbackQuery,
) -> AppResult<SessionUser> {
    let expected = state.sessions.take_oauth_state(sid).await;
    match (expected, query.state) {
        (Some(expected), Some(got)) if expected == got => {}
        _ => return Err(AppError::Validation("OAuth state mismatch".to_string())),
    }

    let code = query
        .code
        .ok_or_else(|| AppError::Validation("missing authorization code".to_string()))?;

    let access_token = provider.exchange_code(&code, &state.redirect_uri).await?;
    provider.fetch_user(&access_token).await
}

pub async fn logout_handler(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Redirect {
    if let Some(sid) = session_id(&headers) {
        state.sessions.remove(&sid).await;
    }
    Redirect::to("/")
}
