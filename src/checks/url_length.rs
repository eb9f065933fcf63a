use crate::types::RuleResult;

use super::target::UrlTarget;

pub const ID: &str = "excessive_length";
pub const WEIGHT: u8 = 15;
pub const MAX_LENGTH: usize = 75;

pub fn check_excessive_length(target: &UrlTarget) -> RuleResult {
    let matched = target.raw.chars().count() > MAX_LENGTH;
    RuleResult::new(ID, "Excessive length", WEIGHT, matched)
}
