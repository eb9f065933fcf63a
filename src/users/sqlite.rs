use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use super::models::{NewUser, User};
use super::repository::UserRepository;
use crate::error::{AppError, AppResult};

const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    fullname TEXT,
    email TEXT UNIQUE NOT NULL,
    hashed_password TEXT NOT NULL
)";

#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Connects and makes sure the `users` table exists.
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        sqlx::query(CREATE_USERS_TABLE).execute(&pool).await?;
        tracing::info!(database_url, "user store ready");

        Ok(Self { pool })
    }
}

fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> AppResult<User> {
    Ok(User {
        id: row.try_get("id")?,
        fullname: row.try_get::<Option<String>, _>("fullname")?.unwrap_or_default(),
        email: row.try_get("email")?,
        hashed_password: row.try_get("hashed_password")?,
    })
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query("SELECT id, fullname, email, hashed_password FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let result = sqlx::query(
            "INSERT INTO users (fullname, email, hashed_password) VALUES (?, ?, ?)",
        )
        .bind(&user.fullname)
        .bind(&user.email)
        .bind(&user.hashed_password)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(User {
                id: done.last_insert_rowid(),
                fullname: user.fullname,
                email: user.email,
                hashed_password: user.hashed_password,
            }),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AppError::EmailTaken)
            }
            Err(e) => Err(e.into()),
        }
    }
}
