// src/checks/mod.rs

pub mod target;
pub mod numeric_ip;
pub mod url_length;
pub mod shortener;
pub mod keywords;
pub mod subdomains;

pub use target::{extract_authority, UrlTarget};

// Re-export check functions
pub use numeric_ip::check_numeric_ip_host;
pub use url_length::check_excessive_length;
pub use shortener::check_shortener_domain;
pub use keywords::check_suspicious_keyword;
pub use subdomains::check_excess_subdomains;

use crate::types::RuleResult;

type Rule = fn(&UrlTarget) -> RuleResult;

/// Every rule, in reporting order. All of them run on every URL.
pub const RULES: [Rule; 5] = [
    check_numeric_ip_host,
    check_excessive_length,
    check_shortener_domain,
    check_suspicious_keyword,
    check_excess_subdomains,
];

pub fn run_checks(url: &str) -> Vec<RuleResult> {
    let target = UrlTarget::parse(url);
    RULES.iter().map(|rule| rule(&target)).collect()
}
