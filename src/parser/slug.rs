//! Heading slug generation.
//!
//! Slugs double as DOM element ids and fragment anchors, so they keep CJK
//! ideographs (U+4E00..=U+9FFF) alongside ASCII word characters.

use regex::Regex;
use std::sync::OnceLock;

/// Generate a URL-fragment-safe slug from heading text.
///
/// Lowercases, drops ASCII and full-width parentheses and colons, turns
/// whitespace runs into a hyphen, strips everything that is not an ASCII
/// word character, a CJK ideograph or `-`, then trims hyphens.
///
/// # Examples
///
/// ```
/// use blogtoc::parser::slugify;
///
/// assert_eq!(slugify("Setup: Step 1"), "setup-step-1");
/// assert_eq!(slugify("快速部署（入门）"), "快速部署入门");
/// assert_eq!(slugify("API Reference (v2)"), "api-reference-v2");
/// ```
pub fn slugify(text: &str) -> String {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    let patterns = PATTERNS.get_or_init(|| {
        vec![
            (Regex::new(r"[（(）)]").unwrap(), ""),
            (Regex::new(r"[：:]").unwrap(), ""),
            (Regex::new(r"\s+").unwrap(), "-"),
            (Regex::new(r"[^A-Za-z0-9_\x{4E00}-\x{9FFF}-]").unwrap(), ""),
        ]
    });

    let mut result = text.to_lowercase();
    for (pattern, replacement) in patterns {
        result = pattern.replace_all(&result, *replacement).into_owned();
    }
    result.trim_matches('-').to_string()
}
