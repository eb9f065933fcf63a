use crate::types::RuleResult;
use once_cell::sync::Lazy;
use regex::Regex;

use super::target::UrlTarget;

pub const ID: &str = "numeric_ip_host";
pub const WEIGHT: u8 = 30;

// Anchored at the start of the authority only; the tail is not checked.
static DOTTED_QUAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}").unwrap());

/// Hosts written as a dotted-decimal address instead of a name.
pub fn check_numeric_ip_host(target: &UrlTarget) -> RuleResult {
    let matched = DOTTED_QUAD.is_match(&target.authority);
    RuleResult::new(ID, "Numeric IP host", WEIGHT, matched)
}
