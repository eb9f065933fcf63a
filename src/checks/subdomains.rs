use crate::types::RuleResult;

use super::target::UrlTarget;

pub const ID: &str = "excess_subdomains";
pub const WEIGHT: u8 = 10;
pub const MAX_DOTS: usize = 2;

pub fn check_excess_subdomains(target: &UrlTarget) -> RuleResult {
    let dots = target.authority.matches('.').count();
    RuleResult::new(ID, "Excess subdomains", WEIGHT, dots > MAX_DOTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(url: &str) -> RuleResult {
        check_excess_subdomains(&UrlTarget::parse(url))
    }

    #[test]
    fn test_two_dots_is_fine() {
        assert!(!check("https://www.example.com/a.b.c.d").matched);
    }

    #[test]
    fn test_three_dots_matches() {
        let result = check("https://a.b.example.com/");
        assert!(result.matched);
        assert_eq!(result.points, 10);
    }

    #[test]
    fn test_dotted_quad_counts_as_three_dots() {
        assert!(check("http://10.0.0.1/").matched);
    }

    #[test]
    fn test_no_authority() {
        assert!(!check("a.b.c.d.e").matched);
    }
}
