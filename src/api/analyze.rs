use axum::Json;

use super::types::*;
use crate::scoring::score_url;

/// Scores the requested URL. Total over every input; malformed URLs are scored, not rejected.
pub fn analyze(request: AnalyzeRequest) -> AnalyzeResponse {
    let score = score_url(&request.url);

    let matched: Vec<&str> = score
        .rules
        .iter()
        .filter(|rule| rule.matched)
        .map(|rule| rule.id.as_str())
        .collect();
    tracing::info!(
        risk_score = score.risk_score,
        verdict = score.verdict.class(),
        rules = ?matched,
        "url analyzed"
    );

    AnalyzeResponse::from_score(request.url, &score)
}

pub async fn analyze_handler(Json(request): Json<AnalyzeRequest>) -> Json<AnalyzeResponse> {
    Json(analyze(request))
}
