// src/api/mod.rs

pub mod types;
pub mod analyze;

pub use types::{AnalyzeRequest, AnalyzeResponse};
pub use analyze::{analyze, analyze_handler};
