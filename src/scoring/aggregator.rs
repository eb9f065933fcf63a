use crate::checks::run_checks;
use crate::types::*;
use serde::{Deserialize, Serialize};

pub const MAX_SCORE: u8 = 100;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreResult {
    pub risk_score: u8,
    pub verdict: Verdict,
    /// Sum of matched rule points before clamping.
    pub raw_total: u32,
    pub rules: Vec<RuleResult>,
}

pub fn aggregate_score(rules: &[RuleResult]) -> ScoreResult {
    let raw_total: u32 = rules.iter().map(|rule| u32::from(rule.points)).sum();
    let risk_score = raw_total.min(u32::from(MAX_SCORE)) as u8;

    ScoreResult {
        risk_score,
        verdict: verdict_from_score(risk_score),
        raw_total,
        rules: rules.to_vec(),
    }
}

pub fn verdict_from_score(score: u8) -> Verdict {
    if score >= 60 {
        Verdict::Dangerous
    } else if score >= 30 {
        Verdict::Suspicious
    } else {
        Verdict::Safe
    }
}

/// Runs every rule against `url` and aggregates. Never fails.
pub fn score_url(url: &str) -> ScoreResult {
    aggregate_score(&run_checks(url))
}
