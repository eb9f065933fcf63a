use crate::types::RuleResult;

use super::target::UrlTarget;

pub const ID: &str = "shortener_domain";
pub const WEIGHT: u8 = 20;

pub const SHORTENERS: [&str; 4] = ["bit.ly", "tinyurl.com", "goo.gl", "t.co"];

/// Substring match against the authority, so `t.co` also hits `microsoft.com`.
pub fn check_shortener_domain(target: &UrlTarget) -> RuleResult {
    let matched = SHORTENERS
        .iter()
        .any(|shortener| target.authority.contains(shortener));
    RuleResult::new(ID, "Known shortener domain", WEIGHT, matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(url: &str) -> RuleResult {
        check_shortener_domain(&UrlTarget::parse(url))
    }

    #[test]
    fn test_each_shortener() {
        for url in [
            "http://bit.ly/abc",
            "https://tinyurl.com/xyz",
            "https://goo.gl/maps",
            "https://t.co/123",
        ] {
            let result = check(url);
            assert!(result.matched, "{url} should match");
            assert_eq!(result.points, 20);
        }
    }

    #[test]
    fn test_substring_semantics() {
        assert!(check("https://microsoft.com/").matched);
        assert!(check("https://www.bit.ly.evil.net/").matched);
    }

    #[test]
    fn test_shortener_in_path_only() {
        assert!(!check("https://example.com/bit.ly").matched);
    }

    #[test]
    fn test_host_is_case_sensitive() {
        assert!(!check("https://BIT.LY/abc").matched);
    }
}
