use super::password::{hash_password, verify_password};
use super::types::{LoginRequest, SignupRequest};
use crate::error::{AppError, AppResult};
use crate::users::{NewUser, User, UserRepository};

pub async fn signup(repo: &dyn UserRepository, request: SignupRequest) -> AppResult<User> {
    // Checked up front so a taken email doesn't pay for a hash.
    if repo.find_by_email(&request.email).await?.is_some() {
        return Err(AppError::EmailTaken);
    }

    let hashed_password = hash_password(request.password).await?;
    let user = repo
        .create(NewUser {
            fullname: request.fullname,
            email: request.email,
            hashed_password,
        })
        .await?;

    tracing::info!(user_id = user.id, "user registered");
    Ok(user)
}

/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn login(repo: &dyn UserRepository, request: LoginRequest) -> AppResult<User> {
    let user = repo
        .find_by_email(&request.email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(request.password, user.hashed_password.clone()).await? {
        tracing::info!(user_id = user.id, "password login rejected");
        return Err(AppError::InvalidCredentials);
    }

    tracing::info!(user_id = user.id, "password login succeeded");
    Ok(user)
}
