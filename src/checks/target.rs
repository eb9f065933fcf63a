// src/checks/target.rs

/// A URL as the rules see it: the untouched input plus its raw authority.
///
/// The authority is split out with generic URL syntax and never validated or
/// normalized, so `user@1.2.3.4:8080` stays exactly that. Input that has no
/// `//` authority section (missing scheme, garbage, empty string) yields an
/// empty authority and host rules simply don't match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlTarget<'a> {
    pub raw: &'a str,
    pub authority: String,
}

impl<'a> UrlTarget<'a> {
    pub fn parse(raw: &'a str) -> Self {
        Self {
            raw,
            authority: extract_authority(raw),
        }
    }
}

/// Returns the authority (userinfo, host, port) of `url`, or an empty string.
pub fn extract_authority(url: &str) -> String {
    // Leading C0 controls and spaces are ignored, tabs and newlines anywhere.
    let cleaned: String = url
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    let rest = strip_scheme(&cleaned);
    let Some(after_slashes) = rest.strip_prefix("//") else {
        return String::new();
    };

    let end = after_slashes
        .find(['/', '?', '#'])
        .unwrap_or(after_slashes.len());
    let authority = &after_slashes[..end];

    // An unbalanced IPv6 bracket is not a usable authority.
    if authority.contains('[') != authority.contains(']') {
        return String::new();
    }

    authority.to_string()
}

fn strip_scheme(url: &str) -> &str {
    let Some(colon) = url.find(':') else {
        return url;
    };
    let scheme = &url[..colon];

    let mut chars = scheme.chars();
    let valid = match chars.next() {
        Some(first) => {
            first.is_ascii_alphabetic()
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    };

    if valid {
        &url[colon + 1..]
    } else {
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authority_with_scheme() {
        assert_eq!(extract_authority("https://example.com/path?q=1"), "example.com");
        assert_eq!(extract_authority("http://user:pw@1.2.3.4:8080/x"), "user:pw@1.2.3.4:8080");
        assert_eq!(extract_authority("ftp://files.example.org"), "files.example.org");
    }

    #[test]
    fn test_authority_stops_at_query_and_fragment() {
        assert_eq!(extract_authority("http://a.com?x=/y"), "a.com");
        assert_eq!(extract_authority("http://a.com#frag"), "a.com");
    }

    #[test]
    fn test_authority_without_scheme_is_empty() {
        assert_eq!(extract_authority("example.com/login"), "");
        assert_eq!(extract_authority("1.2.3.4/admin"), "");
        assert_eq!(extract_authority("www.bit.ly"), "");
    }

    #[test]
    fn test_scheme_relative_url() {
        assert_eq!(extract_authority("//cdn.example.com/lib.js"), "cdn.example.com");
    }

    #[test]
    fn test_garbage_and_empty() {
        assert_eq!(extract_authority(""), "");
        assert_eq!(extract_authority("::::"), "");
        assert_eq!(extract_authority("not a url at all"), "");
        assert_eq!(extract_authority("http:"), "");
    }

    #[test]
    fn test_unbalanced_brackets_yield_empty() {
        assert_eq!(extract_authority("http://[::1/x"), "");
        assert_eq!(extract_authority("http://[::1]:80/x"), "[::1]:80");
    }

    #[test]
    fn test_whitespace_handling() {
        assert_eq!(extract_authority("  http://exa\tmple.com/"), "example.com");
    }

    #[test]
    fn test_invalid_scheme_characters() {
        // "1http" starts with a digit, so there is no scheme and no authority.
        assert_eq!(extract_authority("1http://example.com"), "");
    }
}
