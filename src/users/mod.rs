// src/users/mod.rs

pub mod models;
pub mod repository;
pub mod sqlite;

pub use models::{NewUser, User};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use sqlite::SqliteUserRepository;

use crate::config::IN_MEMORY_DATABASE;
use crate::error::AppResult;
use std::sync::Arc;

/// Picks the user store named by `DATABASE_URL`.
pub async fn connect_user_store(database_url: &str) -> AppResult<Arc<dyn UserRepository>> {
    if database_url == IN_MEMORY_DATABASE {
        tracing::warn!("using in-memory user store; accounts are lost on restart");
        return Ok(Arc::new(InMemoryUserRepository::new()));
    }
    Ok(Arc::new(SqliteUserRepository::connect(database_url).await?))
}
