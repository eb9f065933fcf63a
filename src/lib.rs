// src/lib.rs

pub mod types;
pub mod checks;
pub mod scoring;
pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod oauth;
pub mod pages;
pub mod server;
pub mod session;
pub mod telemetry;
pub mod users;

// Re-export commonly used types
pub use types::*;
pub use scoring::{aggregate_score, score_url, ScoreResult};
pub use api::{analyze, AnalyzeRequest, AnalyzeResponse};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
