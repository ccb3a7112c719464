//! Small text helpers used by the extractor and for log output.
//!
//! - Whitespace collapsing, matching how a browser shows an element's text
//! - String truncation for log previews

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every run of whitespace into a single space and trim both ends.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(collapse_whitespace("  Breaking\n\t news  "), "Breaking news");
/// ```
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE_RUN.replace_all(s.trim(), " ").into_owned()
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (backing off to the nearest
/// char boundary) with an ellipsis and the number of dropped bytes appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Breaking\n\t news  "), "Breaking news");
        assert_eq!(collapse_whitespace("one"), "one");
        assert_eq!(collapse_whitespace(" \n\t "), "");
        assert_eq!(collapse_whitespace("a\u{a0}b"), "a b");
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "Hello, world!";
        assert_eq!(truncate_for_log(s, 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte_boundary() {
        // "ı" is two bytes; cutting at 1 must back off to 0.
        let result = truncate_for_log("ıı", 1);
        assert_eq!(result, "…(+4 bytes)");
    }
}
