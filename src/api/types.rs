use serde::{Deserialize, Serialize};

use crate::scoring::ScoreResult;

#[derive(Clone, Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyzeResponse {
    pub url: String,
    pub risk_score: u8,
    pub status: String,
    pub verdict_class: String,
}

impl AnalyzeResponse {
    pub fn from_score(url: String, score: &ScoreResult) -> Self {
        Self {
            url,
            risk_score: score.risk_score,
            status: score.verdict.label().to_string(),
            verdict_class: score.verdict.class().to_string(),
        }
    }
}
