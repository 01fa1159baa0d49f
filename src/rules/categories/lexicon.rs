//! Lexical rules
//!
//! Scans the full text for the trigger phrases of one lexicon category.
//! Absolute, extreme and authority phrases are always violations; crypto and
//! stock-recommendation phrases are gated on the platform family.

use crate::lexicon::Category;
use crate::rules::engine::{AuditContext, RuleCategory};
use crate::rules::results::{Finding, Severity};

/// Used when the lexicon gives no advisory template for a downgraded category
const DEFAULT_ADVISORY: &str = "检测到\"{phrase}\"，请注意相关政策风险。";

/// Lexical rules for a single category
pub struct LexiconRules {
    category: Category,
}

/// How matches of a category are reported on the current platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Enforcement {
    Violation,
    Advisory,
    Off,
}

impl LexiconRules {
    pub fn new(category: Category) -> Self {
        Self { category }
    }

    fn rule_id(&self) -> &'static str {
        match self.category {
            Category::Absolute => "LEX001",
            Category::Extreme => "LEX002",
            Category::Authority => "LEX003",
            Category::Crypto => "LEX004",
            Category::StockRecommendation => "LEX005",
            Category::Cautionary => "LEX006",
            Category::AdIndicator => "LEX007",
        }
    }

    fn config_key(&self) -> &'static str {
        match self.category {
            Category::Absolute => "lexicon/absolute",
            Category::Extreme => "lexicon/extreme",
            Category::Authority => "lexicon/authority",
            Category::Crypto => "lexicon/crypto",
            Category::StockRecommendation => "lexicon/stock-recommendation",
            Category::Cautionary => "disclosure/risk",
            Category::AdIndicator => "advertising/label",
        }
    }

    fn enforcement(&self, ctx: &AuditContext<'_>) -> Enforcement {
        match self.category {
            Category::Absolute | Category::Extreme | Category::Authority => Enforcement::Violation,
            Category::Crypto if ctx.flags.platform_a => Enforcement::Violation,
            Category::Crypto => Enforcement::Advisory,
            Category::StockRecommendation if ctx.flags.platform_b => Enforcement::Violation,
            // Cautionary and ad phrases feed the disclosure and advertising rules
            Category::StockRecommendation | Category::Cautionary | Category::AdIndicator => {
                Enforcement::Off
            }
        }
    }
}

impl RuleCategory for LexiconRules {
    fn name(&self) -> &'static str {
        self.category.name()
    }

    fn run(&self, ctx: &AuditContext<'_>) -> Vec<Finding> {
        if !ctx.config.is_rule_enabled(self.config_key()) {
            return Vec::new();
        }

        let phrases = ctx.lexicon.category(self.category);
        let category = self.category.name();

        match self.enforcement(ctx) {
            Enforcement::Violation => phrases
                .matches(&ctx.full_text)
                .map(|phrase| {
                    Finding::new(
                        self.rule_id(),
                        category,
                        Severity::Violation,
                        phrases.message_for(phrase),
                    )
                    .with_label(phrases.label.as_str())
                    .with_matched(phrase)
                    .with_remediation(phrases.recommendation.as_str())
                })
                .collect(),
            Enforcement::Advisory => phrases
                .matches(&ctx.full_text)
                .map(|phrase| {
                    let advisory = phrases
                        .advisory_for(phrase)
                        .unwrap_or_else(|| DEFAULT_ADVISORY.replace("{phrase}", phrase));
                    Finding::new(self.rule_id(), category, Severity::Suggestion, advisory)
                        .with_matched(phrase)
                })
                .collect(),
            Enforcement::Off => Vec::new(),
        }
    }
}
