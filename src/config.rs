// src/config.rs

use crate::error::{AppError, AppResult};
use std::env;
use std::path::PathBuf;

pub const IN_MEMORY_DATABASE: &str = "memory";

#[derive(Debug, Clone)]
pub struct GoogleCredentials {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub static_dir: PathBuf,
    pub pages_dir: PathBuf,
    pub public_base_url: String,
    pub google: Option<GoogleCredentials>,
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present; every variable has a default except the
    /// Google pair, which must be set together or not at all.
    pub fn from_env() -> AppResult<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        let port: u16 = get_var_or("PORT", "3000")
            .parse()
            .map_err(|e| AppError::Config(format!("invalid PORT: {e}")))?;

        let google = match (get_opt("GOOGLE_CLIENT_ID"), get_opt("GOOGLE_CLIENT_SECRET")) {
            (Some(client_id), Some(client_secret)) => Some(GoogleCredentials {
                client_id,
                client_secret,
            }),
            (None, None) => None,
            _ => {
                return Err(AppError::Config(
                    "GOOGLE_CLIENT_ID and GOOGLE_CLIENT_SECRET must be set together".to_string(),
                ))
            }
        };

        let public_base_url = get_var_or("PUBLIC_BASE_URL", &format!("http://localhost:{port}"))
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            host: get_var_or("HOST", "0.0.0.0"),
            port,
            database_url: get_var_or("DATABASE_URL", "sqlite://users.db?mode=rwc"),
            static_dir: PathBuf::from(get_var_or("STATIC_DIR", "static")),
            pages_dir: PathBuf::from(get_var_or("PAGES_DIR", ".")),
            public_base_url,
            google,
            log_level: get_var_or("LOG_LEVEL", "info"),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn oauth_redirect_uri(&self) -> String {
        format!("{}/auth/callback", self.public_base_url)
    }
}

fn get_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [
            "PORT",
            "HOST",
            "DATABASE_URL",
            "PUBLIC_BASE_URL",
            "GOOGLE_CLIENT_ID",
            "GOOGLE_CLIENT_SECRET",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn config_defaults() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_env();

        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.database_url, "sqlite://users.db?mode=rwc");
        assert_eq!(cfg.public_base_url, "http://localhost:3000");
        assert!(cfg.google.is_none());
    }

    #[test]
    fn config_rejects_bad_port() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_env();

        env::set_var("PORT", "not-a-port");
        assert!(AppConfig::from_env().is_err());
        env::remove_var("PORT");
    }

    #[test]
    fn config_requires_google_pair() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_env();

        env::set_var("GOOGLE_CLIENT_ID", "id");
        assert!(matches!(AppConfig::from_env(), Err(AppError::Config(_))));

        env::set_var("GOOGLE_CLIENT_SECRET", "secret");
        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.google.map(|g| g.client_id), Some("id".to_string()));

        clear_env();
    }

    #[test]
    fn redirect_uri_strips_trailing_slash() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        clear_env();

        env::set_var("PUBLIC_BASE_URL", "https://scan.example.org/");
        let cfg = AppConfig::from_env().expect("should parse config");
        assert_eq!(cfg.oauth_redirect_uri(), "https://scan.example.org/auth/callback");

        clear_env();
    }
}
