use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::models::{NewUser, User};
use crate::error::{AppError, AppResult};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Stores a new user. Fails with `AppError::EmailTaken` if the email exists.
    async fn create(&self, user: NewUser) -> AppResult<User>;
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(AppError::EmailTaken);
        }

        let stored = User {
            id: users.len() as i64 + 1,
            fullname: user.fullname,
            email: user.email.clone(),
            hashed_password: user.hashed_password,
        };
        users.insert(user.email, stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            fullname: "Ada Lovelace".to_string(),
            email: email.to_string(),
            hashed_password: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryUserRepository::new();

        let created = repo.create(new_user("ada@example.com")).await.unwrap();
        assert_eq!(created.id, 1);

        let found = repo.find_by_email("ada@example.com").await.unwrap();
        assert_eq!(found, Some(created));
        assert_eq!(repo.find_by_email("nobody@example.com").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("ada@example.com")).await.unwrap();

        let err = repo.create(new_user("ada@example.com")).await.unwrap_err();
        assert!(matches!(err, AppError::EmailTaken));
        assert_eq!(repo.len().await, 1);
    }
}
