//! # Compliance Lexicon
//!
//! The lexicon is the data half of the audit: trigger phrases grouped by risk
//! category, plus the disclosure phrases and platform aliases the rules consult.
//! It is plain configuration data, loaded from TOML, so a rule set can be
//! replaced or localized without touching the scanning logic.
//!
//! A default lexicon is embedded in the binary (see `default.toml`) and is
//! available through [`Lexicon::embedded`].
//!
//! ## Examples
//!
//! ```rust
//! use contentguard::lexicon::{Category, Lexicon};
//!
//! let lexicon = Lexicon::embedded();
//! let hits: Vec<_> = lexicon.category(Category::Absolute).matches("稳赚不赔").collect();
//! assert_eq!(hits, vec!["稳赚不赔", "稳赚"]);
//! ```

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::LexiconError;

/// Name used for the embedded resource in error messages
const EMBEDDED_NAME: &str = "<embedded>";

const DEFAULT_LEXICON_TOML: &str = include_str!("default.toml");

lazy_static! {
    static ref DEFAULT_LEXICON: Arc<Lexicon> = Arc::new(
        Lexicon::from_toml_str(DEFAULT_LEXICON_TOML, EMBEDDED_NAME)
            .expect("embedded lexicon must be valid"),
    );
}

/// Lexicon categories, in the order the scanner evaluates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Guaranteed-return and zero-risk claims
    Absolute,
    /// Superlative and absolute-language claims
    Extreme,
    /// False authority or endorsement claims
    Authority,
    /// Cryptocurrency terms
    Crypto,
    /// Unlicensed stock-tipping language
    StockRecommendation,
    /// Return/yield language that needs a risk disclosure
    Cautionary,
    /// Commercial promotion cues that need an advertisement label
    AdIndicator,
}

impl Category {
    /// All categories in evaluation order
    pub const ALL: [Category; 7] = [
        Category::Absolute,
        Category::Extreme,
        Category::Authority,
        Category::Crypto,
        Category::StockRecommendation,
        Category::Cautionary,
        Category::AdIndicator,
    ];

    /// Table name of the category in a lexicon file
    pub fn name(&self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Extreme => "extreme",
            Self::Authority => "authority",
            Self::Crypto => "crypto",
            Self::StockRecommendation => "stock_recommendation",
            Self::Cautionary => "cautionary",
            Self::AdIndicator => "ad_indicator",
        }
    }
}

/// Trigger phrases of one category, with the wording used in its findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseCategory {
    /// Finding type shown to the user (e.g. "极限用语")
    #[serde(default)]
    pub label: String,

    /// Message template; `{phrase}` is replaced by the matched phrase
    #[serde(default = "default_message")]
    pub message: String,

    /// Fixed recommendation attached to every violation of this category
    #[serde(default)]
    pub recommendation: String,

    /// Template for the advisory emitted when the category is not enforced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,

    /// Ordered trigger phrases
    #[serde(default)]
    pub phrases: Vec<String>,
}

fn default_message() -> String {
    "检测到\"{phrase}\"".to_string()
}

impl PhraseCategory {
    /// Phrases contained in `text`, in declaration order.
    ///
    /// A phrase is yielded once no matter how often it occurs.
    pub fn matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.phrases
            .iter()
            .map(String::as_str)
            .filter(move |phrase| text.contains(phrase))
    }

    /// Render the message template for a matched phrase
    pub fn message_for(&self, phrase: &str) -> String {
        self.message.replace("{phrase}", phrase)
    }

    /// Render the advisory template for a matched phrase, if the category has one
    pub fn advisory_for(&self, phrase: &str) -> Option<String> {
        self.advisory
            .as_ref()
            .map(|template| template.replace("{phrase}", phrase))
    }
}

/// Substring aliases for the two platform families with their own policies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformAliases {
    /// 百家号 family: crypto ban, title and paragraph limits
    #[serde(default)]
    pub family_a: Vec<String>,

    /// WeChat family: stock-recommendation enforcement
    #[serde(default)]
    pub family_b: Vec<String>,
}

/// AI-content heuristic terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiTerms {
    /// Terms suggesting AI involvement, matched case-insensitively
    #[serde(default)]
    pub mentions: Vec<String>,

    /// Disclosure phrases that satisfy the AI labeling rule, matched exactly
    #[serde(default)]
    pub disclosure: Vec<String>,
}

/// A complete rule lexicon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    /// Literal label that marks content as an advertisement
    pub ad_label: String,

    /// Phrases that count as a risk disclosure
    pub risk_disclosure: Vec<String>,

    /// Terms that indicate the body mentions a contact channel
    pub contact_keywords: Vec<String>,

    /// Platform family aliases
    pub platforms: PlatformAliases,

    /// AI labeling terms
    pub ai: AiTerms,

    pub absolute: PhraseCategory,
    pub extreme: PhraseCategory,
    pub authority: PhraseCategory,
    pub crypto: PhraseCategory,
    pub stock_recommendation: PhraseCategory,
    pub cautionary: PhraseCategory,
    pub ad_indicator: PhraseCategory,
}

impl Lexicon {
    /// The lexicon compiled into the binary
    pub fn embedded() -> Arc<Lexicon> {
        Arc::clone(&DEFAULT_LEXICON)
    }

    /// Raw TOML of the embedded lexicon
    pub fn embedded_toml() -> &'static str {
        DEFAULT_LEXICON_TOML
    }

    /// Parse and validate a lexicon from TOML text
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, LexiconError> {
        let lexicon: Lexicon = toml::from_str(content).map_err(|e| LexiconError::Parse {
            path: origin.to_string(),
            source: e,
        })?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Load and validate a lexicon file
    pub fn load_from_file(path: &Path) -> Result<Self, LexiconError> {
        let content = fs::read_to_string(path).map_err(|e| LexiconError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Serialize the lexicon back to TOML
    pub fn to_toml(&self) -> Result<String, LexiconError> {
        toml::to_string_pretty(self).map_err(Into::into)
    }

    /// Phrase table of a category
    pub fn category(&self, category: Category) -> &PhraseCategory {
        match category {
            Category::Absolute => &self.absolute,
            Category::Extreme => &self.extreme,
            Category::Authority => &self.authority,
            Category::Crypto => &self.crypto,
            Category::StockRecommendation => &self.stock_recommendation,
            Category::Cautionary => &self.cautionary,
            Category::AdIndicator => &self.ad_indicator,
        }
    }

    /// Whether `text` contains any risk disclosure phrase
    pub fn has_risk_disclosure(&self, text: &str) -> bool {
        self.risk_disclosure.iter().any(|kw| text.contains(kw.as_str()))
    }

    fn validate(&self) -> Result<(), LexiconError> {
        for category in Category::ALL {
            let phrases = &self.category(category).phrases;
            if phrases.is_empty() {
                return Err(LexiconError::EmptyCategory {
                    category: category.name().to_string(),
                });
            }
            reject_blank(&format!("{}.phrases", category.name()), phrases)?;
        }

        reject_blank("ad_label", std::slice::from_ref(&self.ad_label))?;
        reject_blank("risk_disclosure", &self.risk_disclosure)?;
        reject_blank("contact_keywords", &self.contact_keywords)?;
        reject_blank("platforms.family_a", &self.platforms.family_a)?;
        reject_blank("platforms.family_b", &self.platforms.family_b)?;
        reject_blank("ai.mentions", &self.ai.mentions)?;
        reject_blank("ai.disclosure", &self.ai.disclosure)?;
        Ok(())
    }
}

/// Substring matching treats an empty entry as present in every text
fn reject_blank(field: &str, entries: &[String]) -> Result<(), LexiconError> {
    if entries.iter().any(|entry| entry.trim().is_empty()) {
        return Err(LexiconError::BlankEntry {
            field: field.to_string(),
        });
    }
    Ok(())
}
