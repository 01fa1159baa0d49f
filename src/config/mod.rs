//! Configuration module

pub mod loader;

pub use loader::Config;

use serde::{Deserialize, Serialize};

/// Rule configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RuleConfig {
    /// Whether the rule is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

/// Platform formatting limits, counted in characters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Limits {
    /// Longest title accepted on 百家号-family platforms
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,

    /// Longest paragraph before a split is suggested
    #[serde(default = "default_paragraph_max_chars")]
    pub paragraph_max_chars: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            title_max_chars: default_title_max_chars(),
            paragraph_max_chars: default_paragraph_max_chars(),
        }
    }
}

fn default_title_max_chars() -> usize {
    30
}

fn default_paragraph_max_chars() -> usize {
    200
}

/// Rule identifiers accepted in the `[rules]` table
pub const RULE_IDS: &[&str] = &[
    "lexicon/absolute",
    "lexicon/extreme",
    "lexicon/authority",
    "lexicon/crypto",
    "lexicon/stock-recommendation",
    "formatting/title-length",
    "formatting/paragraph-length",
    "disclosure/risk",
    "advertising/label",
    "ai/label",
    "contact/format",
];
