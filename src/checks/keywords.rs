use crate::types::RuleResult;

use super::target::UrlTarget;

pub const ID: &str = "suspicious_keyword";
pub const WEIGHT: u8 = 25;

pub const KEYWORDS: [&str; 8] = [
    "login", "secure", "account", "update", "verify", "banking", "signin", "password",
];

/// Fires once no matter how many keywords appear.
pub fn check_suspicious_keyword(target: &UrlTarget) -> RuleResult {
    let lowered = target.raw.to_lowercase();
    let matched = KEYWORDS.iter().any(|keyword| lowered.contains(keyword));
    RuleResult::new(ID, "Suspicious keyword", WEIGHT, matched)
}
