//! Risk disclosure rules
//!
//! Return and yield language is allowed only when the text also carries a
//! risk disclosure. Text without such language is not checked.

use crate::lexicon::Category;
use crate::rules::engine::{AuditContext, RuleCategory};
use crate::rules::results::{Finding, Severity};

const DISCLOSURE_PRESENT: &str = "已包含合规风险提示";

pub struct DisclosureRules;

impl RuleCategory for DisclosureRules {
    fn name(&self) -> &'static str {
        "disclosure"
    }

    fn run(&self, ctx: &AuditContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();

        if !ctx.config.is_rule_enabled("disclosure/risk") {
            return findings;
        }

        let cautionary = ctx.lexicon.category(Category::Cautionary);
        let Some(trigger) = cautionary.matches(&ctx.full_text).next() else {
            return findings;
        };

        if ctx.lexicon.has_risk_disclosure(&ctx.full_text) {
            findings.push(Finding::new(
                "DSC001",
                "disclosure",
                Severity::Safe,
                DISCLOSURE_PRESENT,
            ));
        } else {
            findings.push(
                Finding::new(
                    "DSC001",
                    "disclosure",
                    Severity::Violation,
                    cautionary.message_for(trigger),
                )
                .with_label(cautionary.label.as_str())
                .with_matched(trigger)
                .with_remediation(cautionary.recommendation.as_str()),
            );
        }

        findings
    }
}
