use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use super::service;
use super::types::{LoginRequest, MessageResponse, SignupRequest};
use crate::error::AppResult;
use crate::server::AppState;

pub async fn signup_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SignupRequest>,
) -> AppResult<Json<MessageResponse>> {
    service::signup(state.users.as_ref(), request).await?;
    Ok(Json(MessageResponse::new("User created successfully")))
}

pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<MessageResponse>> {
    service::login(state.users.as_ref(), request).await?;
    Ok(Json(MessageResponse::new("Login successful")))
}
