//! Contact number patterns

use lazy_static::lazy_static;
use regex::Regex;

/// A pattern for a well-formed contact number
pub struct ContactPattern {
    pub name: &'static str,
    pub regex: Regex,
}

lazy_static! {
    /// Accepted phone number formats, ASCII digits only
    pub static ref PHONE_PATTERNS: Vec<ContactPattern> = vec![
        ContactPattern {
            // Hyphenated 4-3-4 hotline such as 400-123-4567
            name: "Service Hotline",
            regex: Regex::new(r"[0-9]{4}-[0-9]{3}-[0-9]{4}").unwrap(),
        },
        ContactPattern {
            name: "Mobile Number",
            regex: Regex::new(r"[0-9]{11}").unwrap(),
        },
    ];
}

/// Name of the first phone pattern found in `text`
pub fn find_phone_number(text: &str) -> Option<&'static str> {
    PHONE_PATTERNS
        .iter()
        .find(|pattern| pattern.regex.is_match(text))
        .map(|pattern| pattern.name)
}
