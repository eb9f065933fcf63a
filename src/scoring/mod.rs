// src/scoring/mod.rs

pub mod aggregator;

pub use aggregator::{aggregate_score, score_url, verdict_from_score, ScoreResult, MAX_SCORE};
