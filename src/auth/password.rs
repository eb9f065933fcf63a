use crate::error::{AppError, AppResult};

/// Hashes off the async executor; bcrypt is deliberately slow.
pub async fn hash_password(password: String) -> AppResult<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))
}

/// A malformed stored hash counts as a mismatch rather than an error.
pub async fn verify_password(password: String, hashed: String) -> AppResult<bool> {
    let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hashed))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    match verified {
        Ok(matches) => Ok(matches),
        Err(e) => {
            tracing::warn!(error = %e, "stored password hash could not be verified");
            Ok(false)
        }
    }
}
