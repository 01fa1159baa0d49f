//! Advertisement labeling rules

use crate::lexicon::Category;
use crate::rules::engine::{AuditContext, RuleCategory};
use crate::rules::results::{Finding, Severity};

const DEFAULT_ADVISORY: &str = "内容疑似包含商业推广信息，建议显著标明\"广告\"。";

pub struct AdvertisingRules;

impl RuleCategory for AdvertisingRules {
    fn name(&self) -> &'static str {
        "advertising"
    }

    fn run(&self, ctx: &AuditContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();

        if !ctx.config.is_rule_enabled("advertising/label") {
            return findings;
        }

        let indicators = ctx.lexicon.category(Category::AdIndicator);
        let Some(trigger) = indicators.matches(&ctx.full_text).next() else {
            return findings;
        };

        if !ctx.full_text.contains(ctx.lexicon.ad_label.as_str()) {
            let message = indicators
                .advisory_for(trigger)
                .unwrap_or_else(|| DEFAULT_ADVISORY.to_string());
            findings.push(
                Finding::new("ADV001", "advertising", Severity::Suggestion, message)
                    .with_matched(trigger),
            );
        }

        findings
    }
}
