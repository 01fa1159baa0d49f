//! Rules evaluation engine
//!
//! A single audit is a pure, synchronous pass: the draft is normalized once
//! into an [`AuditContext`], every enabled rule category runs against it in a
//! fixed order, and the findings are assembled into an [`AuditReport`].

use std::sync::Arc;
use tracing::{debug, span, Level};

use super::categories::{
    advertising::AdvertisingRules, ai_label::AiLabelRules, contact::ContactRules,
    disclosure::DisclosureRules, formatting::FormattingRules, lexicon::LexiconRules,
};
use super::results::{AuditReport, Finding, Severity};
use crate::config::Config;
use crate::draft::Draft;
use crate::lexicon::{Category, Lexicon};
use crate::platform::{AliasClassifier, PlatformClassifier, PlatformFlags};
use crate::text;

const NO_VIOLATIONS: &str = "未检测到明显违规词汇";
const MANUAL_REVIEW: &str = "建议在发布前进行人工复核，确保数据真实性（多源交叉验证）。";

/// Normalized view of a draft shared by all rule categories
pub struct AuditContext<'a> {
    /// Untouched title
    pub title: &'a str,
    /// Raw body, markup included
    pub content: &'a str,
    /// Body with markup stripped
    pub body: String,
    /// Title and stripped body joined by a space
    pub full_text: String,
    pub flags: PlatformFlags,
    pub lexicon: &'a Lexicon,
    pub config: &'a Config,
}

impl<'a> AuditContext<'a> {
    pub fn new(
        draft: &'a Draft,
        flags: PlatformFlags,
        lexicon: &'a Lexicon,
        config: &'a Config,
    ) -> Self {
        let body = text::strip_markup(&draft.content);
        let full_text = text::full_text(&draft.title, &body);
        Self {
            title: &draft.title,
            content: &draft.content,
            body,
            full_text,
            flags,
            lexicon,
            config,
        }
    }
}

/// Trait for rule categories
pub trait RuleCategory: Send + Sync {
    /// Get the category name
    fn name(&self) -> &'static str;

    /// Run the rules in this category
    fn run(&self, ctx: &AuditContext<'_>) -> Vec<Finding>;
}

/// Main rules evaluation engine
pub struct RulesEngine {
    config: Config,
    lexicon: Arc<Lexicon>,
    classifier: Box<dyn PlatformClassifier>,
    only_categories: Option<Vec<String>>,
    skip_categories: Option<Vec<String>>,
}

impl RulesEngine {
    /// Create a new rules engine over a lexicon
    pub fn new(config: Config, lexicon: Arc<Lexicon>) -> Self {
        let classifier = Box::new(AliasClassifier::new(&lexicon.platforms));
        Self {
            config,
            lexicon,
            classifier,
            only_categories: None,
            skip_categories: None,
        }
    }

    /// Replace the platform classifier
    pub fn with_classifier(mut self, classifier: Box<dyn PlatformClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Set categories to exclusively run
    pub fn set_only_categories(&mut self, categories: Vec<String>) {
        self.only_categories = Some(categories);
    }

    /// Set categories to skip
    pub fn set_skip_categories(&mut self, categories: Vec<String>) {
        self.skip_categories = Some(categories);
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check if a category should be run
    fn should_run_category(&self, category: &str) -> bool {
        if let Some(only) = &self.only_categories {
            return only.iter().any(|c| c == category);
        }

        if let Some(skip) = &self.skip_categories {
            return !skip.iter().any(|c| c == category);
        }

        true
    }

    fn categories() -> Vec<Box<dyn RuleCategory>> {
        vec![
            Box::new(LexiconRules::new(Category::Absolute)),
            Box::new(LexiconRules::new(Category::Extreme)),
            Box::new(LexiconRules::new(Category::Authority)),
            Box::new(LexiconRules::new(Category::Crypto)),
            Box::new(LexiconRules::new(Category::StockRecommendation)),
            Box::new(FormattingRules),
            Box::new(DisclosureRules),
            Box::new(AdvertisingRules),
            Box::new(AiLabelRules),
            Box::new(ContactRules),
        ]
    }

    /// Audit a draft
    pub fn audit(&self, draft: &Draft) -> AuditReport {
        let flags = self.classifier.classify(&draft.platform);
        let span = span!(
            Level::DEBUG,
            "audit",
            platform = %draft.platform,
            platform_a = flags.platform_a,
            platform_b = flags.platform_b
        );
        let _guard = span.enter();

        let ctx = AuditContext::new(draft, flags, &self.lexicon, &self.config);
        let mut report = AuditReport::new(draft.platform.clone(), flags);

        for category in Self::categories() {
            let category_name = category.name();

            if !self.should_run_category(category_name) {
                debug!(category = category_name, "Skipping category");
                continue;
            }

            let findings = category.run(&ctx);
            debug!(
                category = category_name,
                findings_count = findings.len(),
                "Category completed"
            );
            report.add_findings(findings);
        }

        if !report.has_violations() {
            report.add_finding(Finding::new(
                "GEN001",
                "general",
                Severity::Safe,
                NO_VIOLATIONS,
            ));
            report.add_finding(Finding::new(
                "GEN002",
                "general",
                Severity::Suggestion,
                MANUAL_REVIEW,
            ));
        }

        debug!(
            violations = report.count_by_severity(Severity::Violation),
            suggestions = report.count_by_severity(Severity::Suggestion),
            safe = report.count_by_severity(Severity::Safe),
            "Audit complete"
        );

        report
    }

    /// Audit loose title/content/platform strings
    pub fn audit_text(&self, title: &str, content: &str, platform: &str) -> AuditReport {
        self.audit(&Draft::new(title, content, platform))
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new(Config::default(), Lexicon::embedded())
    }
}
