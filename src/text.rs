//! Text normalization
//!
//! Builds the plain-text surface the rules scan: markup is stripped from the
//! body and the title is prepended with a single separating space.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MARKUP_TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Remove every `<...>` span from `content`.
///
/// Unmatched `<` or `>` characters are kept as they are.
pub fn strip_markup(content: &str) -> String {
    MARKUP_TAG.replace_all(content, "").into_owned()
}

/// Join the title and the stripped body into the unified scan target
pub fn full_text(title: &str, stripped_body: &str) -> String {
    format!("{} {}", title, stripped_body)
}

/// Number of characters (not bytes) in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Non-blank paragraphs of `body`, split on newlines
pub fn paragraphs(body: &str) -> impl Iterator<Item = &str> {
    body.split('\n').filter(|p| !p.trim().is_empty())
}
